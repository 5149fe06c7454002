//! Human-readable rendering of route results.

use roomroute_lib::RoutePlan;

/// Render walking directions for a planned route.
///
/// The final step is the item being collected, so it is announced with
/// `Collect` rather than `Go to`.
pub fn render_directions(plan: &RoutePlan) -> String {
    match plan.steps.as_slice() {
        [] => String::new(),
        [only] => format!("You are in the {only}. Done"),
        [first, intermediate @ .., item] => {
            let mut directions = format!("You are in the {first}. ");
            for stop in intermediate {
                directions.push_str(&format!("Go to the {stop}. "));
            }
            directions.push_str(&format!("Collect {item}. Done"));
            directions
        }
    }
}

/// Render the negative answer for an unreachable or unknown goal.
pub fn render_no_route(start: &str, goal: &str, suggestions: &[String]) -> String {
    let mut message = format!("There is no path possible from {start} to {goal}.");
    message.push_str(&format_suggestions(suggestions));
    message
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(" Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            " Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
