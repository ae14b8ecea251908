//! Clipboard writes shared by the screen and the CLI.

use copypasta::ClipboardProvider;
use zeroize::Zeroize;

use crate::error::{Error, Result};

/// Put `contents` on the clipboard. Our own copies are zeroized afterwards;
/// the one handed to the provider belongs to it.
pub fn copy_to<C: ClipboardProvider>(ctx: &mut C, contents: &str) -> Result<()> {
    let mut owned = contents.to_string();
    let result = ctx
        .set_contents(owned.clone())
        .map_err(|e| Error::Clipboard(e.to_string()));
    owned.zeroize();
    result?;

    if let Ok(mut echoed) = ctx.get_contents() {
        echoed.zeroize();
    }
    Ok(())
}

/// In-memory provider for tests.
#[cfg(test)]
#[derive(Default)]
pub struct MemoryClipboard {
    pub contents: String,
    pub reject: bool,
}

#[cfg(test)]
impl ClipboardProvider for MemoryClipboard {
    fn get_contents(
        &mut self,
    ) -> std::result::Result<String, Box<dyn std::error::Error + Send + Sync + 'static>> {
        Ok(self.contents.clone())
    }

    fn set_contents(
        &mut self,
        contents: String,
    ) -> std::result::Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
        if self.reject {
            return Err("selection owner went away".into());
        }
        self.contents = contents;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copies_contents() {
        let mut ctx = MemoryClipboard::default();
        copy_to(&mut ctx, "abc123").unwrap();
        assert_eq!(ctx.contents, "abc123");
    }

    #[test]
    fn rejected_write_is_a_clipboard_error() {
        let mut ctx = MemoryClipboard {
            reject: true,
            ..Default::default()
        };
        let err = copy_to(&mut ctx, "abc123").unwrap_err();
        assert!(matches!(err, Error::Clipboard(ref msg) if msg.contains("selection owner")));
        assert!(ctx.contents.is_empty());
    }
}
