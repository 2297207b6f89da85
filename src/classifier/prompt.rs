use crate::rules::RuleSet;

/// Category suggested to the model when nothing else fits.
pub const FALLBACK_CATEGORY: &str = "Interface";

/// Build the single batch prompt for every pending icon.
///
/// The prompt carries the full closed category list (with each category's
/// tags as examples), every pending identifier, the exact response shape, and
/// the instruction to stay inside the list and cover every icon.
pub fn build_prompt(rules: &RuleSet, pending: &[&str]) -> String {
    let categories = rules
        .rules()
        .map(|rule| format!("- {}: {}", rule.name, rule.tags.join(", ")))
        .collect::<Vec<_>>()
        .join("\n");

    let mut lines = vec![
        "Classify design-system icons for a searchable icon catalog.".to_string(),
        String::new(),
        "Icons come from an open-source icon library plus custom SVG components and are"
            .to_string(),
        "named in SCREAMING_SNAKE_CASE. Infer what each icon depicts from its name.".to_string(),
        String::new(),
        "## Categories (use ONLY these names, never invent new ones)".to_string(),
        String::new(),
        categories,
        String::new(),
        "## Icons".to_string(),
        String::new(),
        "No pattern rule matched these icons:".to_string(),
        String::new(),
        pending.join(", "),
        String::new(),
        "## Response format".to_string(),
        String::new(),
        "Reply with ONLY a JSON array, without markdown fences or commentary:".to_string(),
        String::new(),
        r#"[{"enumName":"ICON_NAME","category":"Category Name","tags":["tag1","tag2","tag3"]}]"#
            .to_string(),
        String::new(),
        "Rules:".to_string(),
        "- category must be copied exactly from the list above".to_string(),
    ];
    if rules.is_valid_category(FALLBACK_CATEGORY) {
        lines.push(format!(
            "- when no category fits, use \"{FALLBACK_CATEGORY}\""
        ));
    }
    lines.push("- give 3 to 5 lowercase tags describing purpose and appearance".to_string());
    lines.push("- include every icon listed above exactly once".to_string());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_lists_every_category_and_pending_icon() {
        let rules = RuleSet::builtin();
        let prompt = build_prompt(&rules, &["UNKNOWN_WIDGET_99", "MYSTERY_ICON"]);
        for name in rules.category_names() {
            assert!(prompt.contains(&format!("- {name}: ")), "missing {name}");
        }
        assert!(prompt.contains("UNKNOWN_WIDGET_99, MYSTERY_ICON"));
        assert!(prompt.contains("- Finance: payment, banking, currency"));
        assert!(prompt.contains("use \"Interface\""));
        assert!(prompt.contains("every icon listed above"));
    }
}
