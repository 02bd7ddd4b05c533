//! Digest of a finished game's log, used to compare results in check mode.

use sha2::{Digest, Sha256};

/// Calculate the lowercase hex SHA-256 hash of `text`.
pub fn calculate_sha256(text: &str) -> String {
    let hash = Sha256::digest(text.as_bytes());
    base16ct::lower::encode_string(&hash)
}

/// Join per-move log lines into the numbered game log: "01: <line>", one per line.
pub fn format_game_log(lines: &[String]) -> String {
    lines
        .iter()
        .enumerate()
        .map(|(index, line)| format!("{:02}: {}", index + 1, line))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha256_simple() {
        assert_eq!(
            calculate_sha256("test"),
            "9f86d081884c7d659a2feaa0c55ad015a3bf4f1b2b0b822cd15d6c15b0f00a08"
        );
    }

    #[test]
    fn sha256_log_line() {
        assert_eq!(
            calculate_sha256("01: B:(0,1),1;____BBB__BW_____"),
            "d087cd890b81b7153cc870fba7372396e91cdcd4b6d13b82bbc88b5a4eb889d1"
        );
    }

    #[test]
    fn game_log_formatting() {
        let lines = vec![
            String::from("B:(0,1),1;____BBB__BW_____"),
            String::from("W:(0,0),1;W___BWB__BW_____"),
        ];
        assert_eq!(
            format_game_log(&lines),
            "01: B:(0,1),1;____BBB__BW_____\n02: W:(0,0),1;W___BWB__BW_____"
        );
        assert_eq!(format_game_log(&[]), "");
    }

    #[test]
    fn sha256_full_log() {
        let lines: Vec<String> = [
            "B:(0,1),1;____BBB__BW_____",
            "W:(0,0),1;W___BWB__BW_____",
            "B:(1,0),1;WB__BBB__BW_____",
            "W:(0,2),2;WB__WBB_WWW_____",
            "B:(0,3),1;WB__WBB_WBW_B___",
            "W:(2,0),3;WWW_WWW_WBW_B___",
            "B:(3,0),1;WWWBWWB_WBW_B___",
            "W:(1,3),1;WWWBWWB_WWW_BW__",
            "B:(2,3),2;WWWBWWB_WWB_BBB_",
            "W:(3,2),2;WWWBWWW_WWWWBBB_",
            "B:(3,1),1;WWWBWWWBWWBWBBB_",
            "W:(3,3),1;WWWBWWWBWWWWBBBW",
        ]
        .iter()
        .map(|line| line.to_string())
        .collect();
        assert_eq!(
            calculate_sha256(&format_game_log(&lines)),
            "ad4679949110ed7997aa1bf09441a7eb491b498189c03685ffdd6ddbb70e3c22"
        );
    }
}
