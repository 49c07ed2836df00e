//! 生成响应解析 - 从模型响应文本中提取围栏代码块

use regex::Regex;
use std::sync::LazyLock;

static SVELTE_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```svelte\n(.*?)\n```").unwrap());
static TYPESCRIPT_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```typescript\n(.*?)\n```").unwrap());
static TS_BLOCK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)```ts\n(.*?)\n```").unwrap());
static HTML_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```html\n(.*?)\n```").unwrap());

/// 从响应中解析出的生成产物
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeneratedArtifacts {
    /// Svelte组件源码
    pub component: Option<String>,
    /// Storybook故事文件
    pub story: Option<String>,
    /// 可选的showcase页面
    pub showcase: Option<String>,
}

impl GeneratedArtifacts {
    /// 组件与故事缺一不可，否则该单元视为解析失败
    pub fn is_complete(&self) -> bool {
        self.component.is_some() && self.story.is_some()
    }
}

/// 提取响应中的三类产物。
///
/// 每类取第一个匹配的围栏代码块，内文逐字保留；故事块先尝试typescript标签，
/// 再尝试ts标签。找不到的块返回None而不是错误，由调用方决定是否跳过该单元。
pub fn parse_generated_response(response: &str) -> GeneratedArtifacts {
    let component = first_capture(&SVELTE_BLOCK, response);
    let story = first_capture(&TYPESCRIPT_BLOCK, response)
        .or_else(|| first_capture(&TS_BLOCK, response));
    let showcase = first_capture(&HTML_BLOCK, response);

    GeneratedArtifacts {
        component,
        story,
        showcase,
    }
}

fn first_capture(re: &Regex, text: &str) -> Option<String> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

// Include tests
#[cfg(test)]
mod tests;
