//! String-in / string-out report API.

use crate::error::Result;
use crate::models::roster::Document;
use crate::render::context::ReportContext;
use crate::render::html;

/// Render a parsed document into the HTML report.
pub fn build_report(document: &Document, include_css: bool) -> String {
    html::render(&ReportContext::build(document, include_css))
}

/// Parse a raw roster export and render the HTML report.
///
/// Fails with [`crate::RosterError::MalformedInput`] when the input
/// is not a valid export document; nothing is rendered in that case.
pub fn render_team_json(input: &str, include_css: bool) -> Result<String> {
    let document: Document = serde_json::from_str(input)?;
    Ok(build_report(&document, include_css))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RosterError;

    #[test]
    fn test_render_team_json_end_to_end() {
        let input = r#"{
            "roster": {
                "name": "Badlands Scuttlers",
                "costs": [{"name": "TV", "value": 600}],
                "forces": [{"selections": [{
                    "name": "Grak",
                    "categories": [{"name": "Player", "primary": true}],
                    "costs": [{"name": "TV", "value": 90}]
                }]}]
            }
        }"#;
        let html = render_team_json(input, true).unwrap();
        assert!(html.contains("Badlands Scuttlers"));
        assert!(html.contains("Grak"));
    }

    #[test]
    fn test_missing_roster_key_is_malformed_input() {
        let err = render_team_json(r#"{"name": "nope"}"#, false).unwrap_err();
        assert!(matches!(err, RosterError::MalformedInput(_)));
    }

    #[test]
    fn test_invalid_json_is_malformed_input() {
        let err = render_team_json("not json at all", false).unwrap_err();
        assert!(matches!(err, RosterError::MalformedInput(_)));
    }
}
