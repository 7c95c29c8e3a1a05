use std::fmt::Display;
use std::io::{self, Write};

/// Formatting knobs shared with the usual print primitives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintOptions {
    pub sep: String,
    pub end: String,
    pub flush: bool,
}

impl Default for PrintOptions {
    fn default() -> Self {
        PrintOptions {
            sep: " ".to_string(),
            end: "\n".to_string(),
            flush: false,
        }
    }
}

pub fn write_values<W, T>(writer: &mut W, values: &[T], options: &PrintOptions) -> io::Result<()>
where
    W: Write,
    T: Display,
{
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            writer.write_all(options.sep.as_bytes())?;
        }
        write!(writer, "{}", value)?;
    }
    writer.write_all(options.end.as_bytes())?;

    if options.flush {
        writer.flush()?;
    }
    Ok(())
}

/// Writes `values` to stderr, separated by `sep` and terminated by `end`.
///
/// Never touches stdout. A broken stderr is ignored, the same as the
/// standard print helpers do when there is nowhere left to report to.
pub fn eprint_values<T: Display>(values: &[T], options: &PrintOptions) {
    let stderr = io::stderr();
    let mut handle = stderr.lock();
    let _ = write_values(&mut handle, values, options);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render<T: Display>(values: &[T], options: &PrintOptions) -> String {
        let mut buffer = Vec::new();
        write_values(&mut buffer, values, options).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_default_options_match_print() {
        assert_eq!(render(&["a", "b", "c"], &PrintOptions::default()), "a b c\n");
    }

    #[test]
    fn test_mixed_display_values() {
        let values: Vec<Box<dyn Display>> = vec![Box::new("count"), Box::new(3), Box::new(1.5)];
        assert_eq!(render(&values, &PrintOptions::default()), "count 3 1.5\n");
    }

    #[test]
    fn test_custom_separator_and_terminator() {
        let options = PrintOptions {
            sep: ", ".to_string(),
            end: "!".to_string(),
            ..PrintOptions::default()
        };
        assert_eq!(render(&["x", "y"], &options), "x, y!");
    }

    #[test]
    fn test_no_values_writes_only_terminator() {
        let values: [&str; 0] = [];
        assert_eq!(render(&values, &PrintOptions::default()), "\n");
    }

    #[test]
    fn test_eprint_values_does_not_panic() {
        let options = PrintOptions {
            flush: true,
            ..PrintOptions::default()
        };
        eprint_values(&["diagnostic"], &options);
    }
}
