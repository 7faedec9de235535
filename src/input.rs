use log::debug;
use std::io::{self, BufRead, Write};

/// Prints an optional prompt to stdout and reads a single line from stdin.
///
/// The returned line has its trailing line ending removed. Reaching the end of
/// input before anything is read is reported as [io::ErrorKind::UnexpectedEof].
///
/// ```no_run
/// let name = plistio::get_input(Some("Repository name: "))?;
/// println!("Using repository '{name}'");
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn get_input(prompt: Option<&str>) -> io::Result<String> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    get_input_from(stdin.lock(), stdout.lock(), prompt)
}

/// Same as [get_input], but with explicit input and output streams.
pub fn get_input_from<R: BufRead, W: Write>(
    mut reader: R,
    mut writer: W,
    prompt: Option<&str>,
) -> io::Result<String> {
    if let Some(prompt) = prompt {
        writer.write_all(prompt.as_bytes())?;
        writer.flush()?;
    }

    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        debug!("End of input while waiting for a line");
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "end of input while reading a line",
        ));
    }
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_is_written_and_line_is_trimmed() {
        let mut out = Vec::new();
        let line = get_input_from(&b"munki\r\nnext\n"[..], &mut out, Some("Username: ")).unwrap();
        assert_eq!(line, "munki");
        assert_eq!(out, b"Username: ");
    }

    #[test]
    fn no_prompt() {
        let mut out = Vec::new();
        let line = get_input_from(&b"last line"[..], &mut out, None).unwrap();
        assert_eq!(line, "last line");
        assert!(out.is_empty());
    }

    #[test]
    fn empty_line_is_not_eof() {
        let line = get_input_from(&b"\n"[..], io::sink(), None).unwrap();
        assert_eq!(line, "");
    }

    #[test]
    fn eof() {
        let err = get_input_from(&b""[..], io::sink(), Some("> ")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
