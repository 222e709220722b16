//! Locations inside a converted object graph
//!
//! Rendered as `$` for the root, `.name` for identifier-like keys,
//! `["any key"]` for everything else and `[3]` for list positions, so
//! `$.servers[1]["bind addr"]` names one leaf unambiguously.

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Key(String),
    Index(usize),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Path {
    segments: Vec<Segment>,
}

impl Path {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn push_key(&mut self, key: &str) {
        self.segments.push(Segment::Key(key.to_string()));
    }

    pub fn push_index(&mut self, index: usize) {
        self.segments.push(Segment::Index(index));
    }

    pub fn pop(&mut self) {
        self.segments.pop();
    }

    pub fn depth(&self) -> usize {
        self.segments.len()
    }
}

fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

impl std::fmt::Display for Path {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("$")?;
        for segment in &self.segments {
            match segment {
                Segment::Key(k) if is_identifier(k) => write!(f, ".{}", k)?,
                Segment::Key(k) => write!(f, "[{:?}]", k)?,
                Segment::Index(i) => write!(f, "[{}]", i)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root() {
        assert_eq!(Path::root().to_string(), "$");
    }

    #[test]
    fn test_mixed_segments() {
        let mut path = Path::root();
        path.push_key("servers");
        path.push_index(1);
        path.push_key("bind addr");
        assert_eq!(path.to_string(), r#"$.servers[1]["bind addr"]"#);
        assert_eq!(path.depth(), 3);

        path.pop();
        assert_eq!(path.to_string(), "$.servers[1]");
    }

    #[test]
    fn test_non_identifier_keys_are_quoted() {
        let mut path = Path::root();
        path.push_key("1st");
        assert_eq!(path.to_string(), r#"$["1st"]"#);

        let mut path = Path::root();
        path.push_key("");
        assert_eq!(path.to_string(), r#"$[""]"#);
    }
}
