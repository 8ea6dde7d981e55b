use api::tx_summary::TxSummary;
use chrono::DateTime;
use chrono::Local;
use dioxus::prelude::*;

/// One table row: abbreviated identifier and local timestamp.
#[component]
pub fn TxRow(tx: TxSummary) -> Element {
    let abbreviated = truncate_with_ellipsis(&tx.tx_id);
    let when = format_timestamp(tx.timestamp);

    rsx! {
        tr {
            td {
                code {
                    title: "{tx.tx_id}",
                    "{abbreviated}"
                }
            }
            td { "{when}" }
        }
    }
}

fn format_timestamp(timestamp: u64) -> String {
    i64::try_from(timestamp)
        .ok()
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .map(|utc| utc.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| timestamp.to_string())
}

/// Truncates a string to the first 8 and last 8 characters, joined by "..."
/// If the string is 16 characters or fewer, it's returned unchanged.
fn truncate_with_ellipsis(s: &str) -> String {
    const KEEP: usize = 8;
    let char_count = s.chars().count();
    if char_count <= KEEP * 2 {
        return s.to_string();
    }

    let first_part: String = s.chars().take(KEEP).collect();
    let last_part: String = s.chars().skip(char_count - KEEP).collect();
    format!("{}...{}", first_part, last_part)
}
