//! Console wording shared by the front-ends

pub const FROM_PROMPT: &str = "From account: ";
pub const TO_PROMPT: &str = "To account: ";
pub const AMOUNT_PROMPT: &str = "Amount: ";
pub const PROCEED_PROMPT: &str = "Proceed? [y/N]: ";

pub fn progress_line(step: u8, total: u8) -> String {
    format!("Progress: [{}/{}]", step, total)
}

/// Final line of a transfer: `DONE:` on success, `FAILED:` otherwise
pub fn result_line(success: bool, message: &str) -> String {
    if success {
        format!("DONE: {}", message)
    } else {
        format!("FAILED: {}", message)
    }
}

pub fn error_line(message: &str) -> String {
    format!("ERROR: {}", message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines() {
        assert_eq!(progress_line(2, 4), "Progress: [2/4]");
        assert_eq!(result_line(true, "Transfer completed"), "DONE: Transfer completed");
        assert_eq!(result_line(false, "nope"), "FAILED: nope");
        assert_eq!(error_line("bad"), "ERROR: bad");
    }
}
