use crate::models::Category;
use crate::services::ai::{LlmProvider, Message};

const SYSTEM_PROMPT: &str = r#"You are Travax, an AI travel agent helping travelers plan and book trips.

Answer the traveler's latest request with concrete, bookable options.

Formatting rules:
- List up to 6 options as a numbered list, one option per line
- Give every option an explicit price written like $1,234
- Keep each option in the same order as its price
- Use proper capitalized names for cities, hotels and countries
- No markdown tables, no JSON
- Finish with one short sentence of advice
"#;

fn category_guidance(category: Category) -> &'static str {
    match category {
        Category::Flights => {
            "Describe each flight as a route like \"New York to London\", followed by the departure date (\"on March 3\") and the fare."
        }
        Category::Hotels => {
            "Name each property in full including its type (Hotel, Resort, Inn, Lodge, Suites) and say which city it is in (\"in Dubai\"), with the nightly rate."
        }
        Category::Activities => {
            "Name each activity ending with what it is (tour, experience, excursion, cruise, safari, adventure), where it happens (\"in Rome\"), how long it takes in hours or days, and the price per person."
        }
        Category::Visas => {
            "Name each visa type (e.g. \"Japan Tourist Visa\"), the country it is for, the government fee, and what documents are required."
        }
    }
}

pub fn system_prompt(category: Category) -> String {
    format!(
        "{SYSTEM_PROMPT}\nThe traveler is looking for {category}. {}",
        category_guidance(category)
    )
}

/// Ask the assistant; `history` is the conversation so far, oldest first.
pub async fn ask_travel_agent(
    llm: &dyn LlmProvider,
    history: &[Message],
    query: &str,
    category: Category,
) -> anyhow::Result<String> {
    let mut messages = history.to_vec();
    messages.push(Message::user(query));

    let reply = llm.chat(&system_prompt(category), &messages).await?;
    Ok(reply.trim().to_string())
}
