//! External OCR engine driven through a command line.

use std::io::Write;
use std::path::Path;
use std::process::Command;

use tracing::{debug, warn};

use idscan_core::{OcrError, TextRecognizer};

/// Placeholder replaced with the image path in the command arguments.
const INPUT_PLACEHOLDER: &str = "{input}";

/// Runs an OCR binary (tesseract by default) and reads the text from stdout.
pub struct CommandRecognizer {
    program: String,
    args: Vec<String>,
}

impl CommandRecognizer {
    /// Build a recognizer from `[program, args...]`.
    pub fn new(command: &[String]) -> Result<Self, OcrError> {
        let (program, args) = command
            .split_first()
            .ok_or_else(|| OcrError::Unavailable("OCR command is empty".to_string()))?;

        Ok(Self {
            program: program.clone(),
            args: args.to_vec(),
        })
    }

    fn run(&self, input: &Path) -> Result<String, OcrError> {
        let input = input.to_string_lossy();
        let args: Vec<String> = self
            .args
            .iter()
            .map(|arg| arg.replace(INPUT_PLACEHOLDER, &input))
            .collect();

        debug!("Running OCR command: {} {}", self.program, args.join(" "));

        let output = Command::new(&self.program)
            .args(&args)
            .output()
            .map_err(|e| OcrError::Unavailable(format!("{}: {}", self.program, e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(OcrError::Recognition(format!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            )));
        }

        String::from_utf8(output.stdout).map_err(|e| OcrError::InvalidOutput(e.to_string()))
    }
}

impl TextRecognizer for CommandRecognizer {
    fn recognize(&self, image_bytes: &[u8]) -> Result<String, OcrError> {
        let mut scratch = tempfile::Builder::new()
            .prefix("idscan-")
            .suffix(".img")
            .tempfile()
            .map_err(|e| OcrError::Recognition(format!("cannot create scratch image: {}", e)))?;
        scratch
            .write_all(image_bytes)
            .and_then(|()| scratch.flush())
            .map_err(|e| OcrError::Recognition(format!("{}: {}", scratch.path().display(), e)))?;

        let result = self.run(scratch.path());
        if let Err(e) = scratch.close() {
            warn!("Could not remove scratch image: {}", e);
        }
        result
    }

    fn name(&self) -> &str {
        &self.program
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_command() {
        assert!(matches!(
            CommandRecognizer::new(&[]),
            Err(OcrError::Unavailable(_))
        ));
    }

    #[test]
    fn test_missing_program() {
        let r = CommandRecognizer::new(&command(&["idscan-no-such-ocr-binary", "{input}"])).unwrap();
        assert!(matches!(r.recognize(b"x"), Err(OcrError::Unavailable(_))));
    }

    #[cfg(unix)]
    #[test]
    fn test_reads_stdout() {
        let r = CommandRecognizer::new(&command(&["cat", "{input}"])).unwrap();
        assert_eq!(r.recognize(b"PASSPORT NO: Z1234567").unwrap(), "PASSPORT NO: Z1234567");
        assert_eq!(r.name(), "cat");
    }

    #[cfg(unix)]
    #[test]
    fn test_scratch_image_is_removed() {
        let r = CommandRecognizer::new(&command(&["echo", "{input}"])).unwrap();
        let printed = r.recognize(b"image bytes").unwrap();
        let path = Path::new(printed.trim());

        assert!(path.file_name().unwrap().to_string_lossy().starts_with("idscan-"));
        assert!(!path.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_program() {
        let r = CommandRecognizer::new(&command(&["false"])).unwrap();
        assert!(matches!(r.recognize(b"x"), Err(OcrError::Recognition(_))));
    }
}
