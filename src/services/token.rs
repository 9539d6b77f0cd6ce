//! Access token kept in client-side storage
//!
//! The token is read after each table load and reported in the status bar.
//! No request carries it.

use std::fs;
use std::path::Path;

pub const TOKEN_FILE: &str = "access_token";

/// Read `<dir>/access_token`, trimmed. Missing or blank files yield `None`.
pub fn load_access_token(dir: &Path) -> Option<String> {
    let contents = fs::read_to_string(dir.join(TOKEN_FILE)).ok()?;
    let token = contents.trim();
    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "showtable-tui-token-{}-{}",
            name,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_missing_token() {
        let dir = scratch_dir("missing");
        assert_eq!(load_access_token(&dir), None);
    }

    #[test]
    fn test_token_is_trimmed() {
        let dir = scratch_dir("trimmed");
        fs::write(dir.join(TOKEN_FILE), "abc.def.ghi\n").unwrap();
        assert_eq!(load_access_token(&dir), Some("abc.def.ghi".to_string()));
    }

    #[test]
    fn test_blank_token() {
        let dir = scratch_dir("blank");
        fs::write(dir.join(TOKEN_FILE), "  \n").unwrap();
        assert_eq!(load_access_token(&dir), None);
    }
}
