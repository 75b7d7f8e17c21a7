use crate::query::record::Record;

/// Case-insensitive substring search across a record's search fields.
///
/// A record matches when the lowercased term occurs in any one field. A blank
/// term returns the whole collection. Relative order is preserved. The term is
/// not tokenized: `"gpt 4"` does not match `"GPT-4"`.
pub fn search<R: Record + Clone>(collection: &[R], term: &str) -> Vec<R> {
    if term.trim().is_empty() {
        return collection.to_vec();
    }

    let needle = term.to_lowercase();
    collection
        .iter()
        .filter(|record| {
            record
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CategoryRecord, ToolRecord};

    fn tool(id: &str, name: &str, company: &str, tags: &[&str]) -> ToolRecord {
        let mut tool = ToolRecord::new(id, name, "Misc");
        tool.company = company.into();
        tool.tags = tags.iter().map(|t| t.to_string()).collect();
        tool
    }

    fn sample() -> Vec<ToolRecord> {
        vec![
            tool("gpt-4", "GPT-4", "OpenAI", &["LLM", "Chat"]),
            tool("copilot", "GitHub Copilot", "GitHub", &["Code Generation"]),
            tool("cursor", "Cursor", "Anysphere", &["Code Generation", "IDE"]),
            tool("midjourney", "Midjourney", "Midjourney Inc.", &["Images"]),
        ]
    }

    #[test]
    fn test_blank_term_returns_everything() {
        let tools = sample();
        assert_eq!(search(&tools, ""), tools);
        assert_eq!(search(&tools, "   "), tools);
    }

    #[test]
    fn test_matches_tag_when_name_does_not() {
        let tools = sample();
        let ids: Vec<_> = search(&tools, "code").into_iter().map(|t| t.id).collect();
        assert_eq!(ids, vec!["copilot", "cursor"]);
    }

    #[test]
    fn test_case_insensitive_company_match() {
        let tools = sample();
        let found = search(&tools, "OPENAI");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "gpt-4");
    }

    #[test]
    fn test_no_punctuation_normalization() {
        let tools = sample();
        assert!(search(&tools, "gpt 4").is_empty());
        assert_eq!(search(&tools, "gpt-4").len(), 1);
    }

    #[test]
    fn test_searches_category_descriptions() {
        let mut category = CategoryRecord::new("Voice & Audio");
        category.description = "Speech synthesis and transcription".into();
        let categories = vec![CategoryRecord::new("Image Generation"), category];

        let found = search(&categories, "speech");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Voice & Audio");
    }

    #[test]
    fn test_works_over_borrowed_records() {
        let tools = sample();
        let refs: Vec<&ToolRecord> = tools.iter().collect();
        let found = search(&refs, "midjourney");
        assert!(std::ptr::eq(found[0], &tools[3]));
    }
}
