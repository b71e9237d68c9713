//! Prompt construction for the interpretation request.
//!
//! The prompt frames the model as a wandering Taoist diviner, then lays out
//! the cast data and asks for a JSON reply matching the response schema.

use crate::request::InterpretationRequest;

const PERSONA: &str = "You are Wai De Han, a wandering Taoist, a sage and diviner of the \
I Ching. You marvel daily at the plain wonder of being alive, and you regard every \
consultation as one more step in the great dance of changes, a dance one joins not by \
choosing but simply by being. Let what is, be; the mind will finish the rest.";

/// Build the natural-language prompt for a resolved cast.
pub fn build_prompt(request: &InterpretationRequest) -> String {
    let changing_text = if request.changing_positions.is_empty() {
        "There are no changing lines.".to_string()
    } else {
        let positions: Vec<String> = request
            .changing_positions
            .iter()
            .map(|p| p.to_string())
            .collect();
        format!("Changing lines: {}", positions.join(", "))
    };

    let secondary_text = match &request.secondary {
        Some(secondary) => format!(
            "Relating hexagram: #{} {} ({})",
            secondary.number, secondary.pinyin, secondary.name
        ),
        None => "There is no relating hexagram, since no line is changing.".to_string(),
    };

    let question_text = if request.question.trim().is_empty() {
        "The seeker asks for general guidance.".to_string()
    } else {
        format!("The seeker ponders this: \"{}\"", request.question.trim())
    };

    format!(
        "{PERSONA}\n\n\
        From this wisdom, give a deep and considered reading. Your answer should be \
        poetic and metaphorical, and reflect your way of seeing the world.\n\n\
        {question_text}\n\
        Let us see what pattern the currents of change have woven...\n\n\
        The cast:\n\
        Primary hexagram: #{} {} ({})\n\
        {changing_text}\n\
        {secondary_text}\n\n\
        Reply in JSON following the provided schema.",
        request.primary.number, request.primary.pinyin, request.primary.name
    )
}
