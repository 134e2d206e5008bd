// src/services/prompts.rs
use super::catalog::products_json;

/// Budget as it appears in the prompt. A missing or zero budget reads "No limit".
pub fn budget_label(budget: Option<f64>) -> String {
    match budget {
        Some(b) if b != 0.0 => format!("{b:?}"),
        _ => "No limit".to_string(),
    }
}

pub fn recommendation_prompt(query: &str, budget: Option<f64>) -> String {
    format!(
        "Based on the user query: \"{query}\"\n\
         Budget: ${budget}\n\
         \n\
         Available products:\n\
         {products}\n\
         \n\
         Recommend the most suitable products and explain why.",
        budget = budget_label(budget),
        products = products_json(),
    )
}

pub fn support_prompt(message: &str) -> String {
    format!(
        "You are a helpful e-commerce customer support assistant.\n\
         Customer message: \"{message}\"\n\
         \n\
         Provide a helpful response about our products, shipping, returns, or general support.\n\
         Keep responses concise and friendly."
    )
}

pub fn search_prompt(query: &str) -> String {
    format!(
        "Search query: \"{query}\"\n\
         \n\
         Available products:\n\
         {products}\n\
         \n\
         Find products that match the search intent and rank them by relevance.\n\
         Return a JSON list of matching product IDs with relevance scores.",
        products = products_json(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budget_defaults_to_no_limit() {
        assert_eq!(budget_label(None), "No limit");
        assert_eq!(budget_label(Some(0.0)), "No limit");
        assert_eq!(budget_label(Some(1500.5)), "1500.5");
        assert_eq!(budget_label(Some(1500.0)), "1500.0");
    }

    #[test]
    fn recommendation_prompt_embeds_catalog() {
        let prompt = recommendation_prompt("gaming gear", None);
        assert!(prompt.contains("\"gaming gear\""));
        assert!(prompt.contains("Budget: $No limit"));
        assert!(prompt.contains("Coffee Mug"));
        assert!(prompt.contains("999.99"));
    }

    #[test]
    fn support_prompt_quotes_customer() {
        let prompt = support_prompt("Where is my order?");
        assert!(prompt.contains("Customer message: \"Where is my order?\""));
        assert!(!prompt.contains("Laptop"));
    }

    #[test]
    fn search_prompt_asks_for_ids() {
        let prompt = search_prompt("mug");
        assert!(prompt.contains("Search query: \"mug\""));
        assert!(prompt.contains("product IDs"));
    }
}
