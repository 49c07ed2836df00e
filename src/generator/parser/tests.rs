#[cfg(test)]
mod tests {
    use crate::generator::parser::parse_generated_response;

    #[test]
    fn test_extracts_component_and_story_verbatim() {
        let response = "Here is the component:\n\n```svelte\n<script>\n  export let label = '';\n</script>\n\n<button>{label}</button>\n```\n\nAnd the story:\n\n```typescript\nexport default { title: 'Button' };\n```\n";

        let artifacts = parse_generated_response(response);

        assert_eq!(
            artifacts.component.as_deref(),
            Some("<script>\n  export let label = '';\n</script>\n\n<button>{label}</button>")
        );
        assert_eq!(
            artifacts.story.as_deref(),
            Some("export default { title: 'Button' };")
        );
        assert!(artifacts.showcase.is_none());
        assert!(artifacts.is_complete());
    }

    #[test]
    fn test_story_falls_back_to_ts_tag() {
        let response = "```svelte\n<span/>\n```\n\n```ts\nexport const Primary = {};\n```\n";

        let artifacts = parse_generated_response(response);

        assert_eq!(artifacts.story.as_deref(), Some("export const Primary = {};"));
    }

    #[test]
    fn test_typescript_tag_wins_over_ts_tag() {
        let response = "```ts\nsecond\n```\n\n```typescript\nfirst\n```\n";

        let artifacts = parse_generated_response(response);

        // typescript标签优先，即使ts块出现得更早
        assert_eq!(artifacts.story.as_deref(), Some("first"));
    }

    #[test]
    fn test_first_block_of_each_kind_wins() {
        let response =
            "```svelte\none\n```\n\n```svelte\ntwo\n```\n\n```typescript\nstory\n```\n";

        let artifacts = parse_generated_response(response);

        assert_eq!(artifacts.component.as_deref(), Some("one"));
    }

    #[test]
    fn test_showcase_block_is_optional_extra() {
        let response = "```svelte\n<div/>\n```\n\n```typescript\nexport default {};\n```\n\n```html\n<!DOCTYPE html>\n<html><head></head><body></body></html>\n```\n";

        let artifacts = parse_generated_response(response);

        assert_eq!(
            artifacts.showcase.as_deref(),
            Some("<!DOCTYPE html>\n<html><head></head><body></body></html>")
        );
    }

    #[test]
    fn test_missing_story_is_incomplete_not_error() {
        let response = "```svelte\n<div/>\n```\n\nNo story this time.";

        let artifacts = parse_generated_response(response);

        assert!(artifacts.component.is_some());
        assert!(artifacts.story.is_none());
        assert!(!artifacts.is_complete());
    }

    #[test]
    fn test_missing_component_is_incomplete_not_error() {
        let response = "```typescript\nexport default {};\n```\n";

        let artifacts = parse_generated_response(response);

        assert!(artifacts.component.is_none());
        assert!(!artifacts.is_complete());
    }

    #[test]
    fn test_empty_response() {
        let artifacts = parse_generated_response("");

        assert_eq!(artifacts, Default::default());
        assert!(!artifacts.is_complete());
    }

    #[test]
    fn test_inner_whitespace_is_preserved() {
        let response = "```svelte\n\n  <div>\n    indented\n  </div>\n\n```\n```typescript\n\tstory\n```\n";

        let artifacts = parse_generated_response(response);

        assert_eq!(
            artifacts.component.as_deref(),
            Some("\n  <div>\n    indented\n  </div>\n")
        );
        assert_eq!(artifacts.story.as_deref(), Some("\tstory"));
    }
}
