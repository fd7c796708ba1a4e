#![allow(dead_code)]

use cors_sandbox::Outcome;
use cors_sandbox::constants::header;

pub fn header_value<'a>(outcome: &'a Outcome, name: &str) -> Option<&'a str> {
    outcome
        .response_headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(name))
        .map(|(_, v)| v.as_str())
}

pub fn header_names(outcome: &Outcome) -> Vec<&str> {
    outcome
        .response_headers
        .keys()
        .map(String::as_str)
        .collect()
}

pub fn reason_messages_contain(outcome: &Outcome, needle: &str) -> bool {
    outcome
        .reason_messages()
        .iter()
        .any(|message| message.contains(needle))
}

pub fn allow_origin(outcome: &Outcome) -> Option<&str> {
    header_value(outcome, header::ACCESS_CONTROL_ALLOW_ORIGIN)
}
