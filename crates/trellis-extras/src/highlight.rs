//! Lightweight code tokenization for keyword highlighting.
//!
//! This is a single-pass scanner, not a full lexer: it recognizes string
//! literals, comments, numbers, and per-language keywords, and emits `Text`
//! for everything in between. Tokens are ordered, non-overlapping, and cover
//! the input exactly, so a renderer can walk them without gap handling.
//!
//! Feature-gated behind `highlight`.

use std::collections::{HashMap, HashSet};
use std::ops::Range;

// ---------------------------------------------------------------------------
// Token model
// ---------------------------------------------------------------------------

/// Semantic token categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Keyword,
    Str,
    Comment,
    Number,
    Text,
}

/// A token with a kind and byte range in the source text.
///
/// Ranges are always byte offsets into the source. Tokens must satisfy:
/// - `range.start <= range.end`
/// - `range.end <= source.len()`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub range: Range<usize>,
}

impl Token {
    /// Create a token. Panics in debug builds if the range is inverted.
    pub fn new(kind: TokenKind, range: Range<usize>) -> Self {
        debug_assert!(range.start <= range.end, "token range must be ordered");
        Self { kind, range }
    }

    /// Token length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.range.end.saturating_sub(self.range.start)
    }

    /// Whether the token is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.range.start >= self.range.end
    }

    /// Extract the token's text from a source string.
    #[must_use]
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.range.clone()]
    }
}

// ---------------------------------------------------------------------------
// Built-in keyword tables
// ---------------------------------------------------------------------------

const JS_KEYWORDS: &[&str] = &[
    "const", "let", "var", "function", "return", "if", "else", "for", "while",
    "class", "import", "export", "from", "default", "async", "await", "new",
    "this", "typeof", "instanceof", "null", "undefined", "true", "false",
];

const TS_EXTRA_KEYWORDS: &[&str] = &[
    "interface", "type", "enum", "implements", "extends", "public", "private",
    "protected", "readonly", "namespace", "declare", "abstract", "keyof",
    "infer", "never", "unknown", "any",
];

const PYTHON_KEYWORDS: &[&str] = &[
    "def", "class", "import", "from", "return", "if", "elif", "else", "for",
    "while", "try", "except", "finally", "with", "as", "lambda", "yield",
    "pass", "break", "continue", "raise", "assert", "global", "nonlocal",
    "in", "is", "not", "and", "or", "None", "True", "False",
];

const JAVA_KEYWORDS: &[&str] = &[
    "public", "private", "protected", "static", "final", "void", "int",
    "long", "double", "float", "boolean", "char", "byte", "short", "class",
    "interface", "extends", "implements", "return", "if", "else", "for",
    "while", "new", "this", "super", "null", "true", "false", "try", "catch",
    "finally", "throw", "throws", "import", "package",
];

const CSS_KEYWORDS: &[&str] = &[
    "color", "background", "margin", "padding", "border", "display", "flex",
    "grid", "position", "absolute", "relative", "fixed", "width", "height",
    "font-size", "font-weight", "important",
];

const HTML_KEYWORDS: &[&str] = &[
    "div", "span", "html", "head", "body", "script", "style", "link", "meta",
    "title", "class", "id", "href", "src",
];

const BASH_KEYWORDS: &[&str] = &[
    "if", "then", "else", "elif", "fi", "for", "do", "done", "while", "case",
    "esac", "function", "return", "export", "local", "echo", "cd", "ls",
    "grep", "sed", "awk", "cat", "mkdir", "rm", "cp", "mv", "chmod", "sudo",
];

const GIT_KEYWORDS: &[&str] = &[
    "git", "commit", "push", "pull", "clone", "branch", "checkout", "merge",
    "rebase", "status", "add", "log", "diff", "stash", "fetch", "remote",
    "reset", "tag",
];

const RUST_KEYWORDS: &[&str] = &[
    "fn", "let", "mut", "const", "static", "pub", "use", "mod", "crate",
    "struct", "enum", "trait", "impl", "for", "where", "if", "else", "match",
    "loop", "while", "return", "break", "continue", "move", "ref", "self",
    "Self", "super", "async", "await", "dyn", "unsafe", "true", "false",
];

// ---------------------------------------------------------------------------
// Highlighter
// ---------------------------------------------------------------------------

/// Keyword-table driven tokenizer.
///
/// Holds per-language keyword sets (lowercase language keys). Callers can
/// replace a language's table with [`Highlighter::with_keywords`]; a custom
/// table overrides the built-in one outright rather than merging into it.
pub struct Highlighter {
    tables: HashMap<String, HashSet<&'static str>>,
    custom: HashMap<String, HashSet<String>>,
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl Highlighter {
    /// Create a highlighter with the built-in language tables.
    pub fn new() -> Self {
        let mut tables = HashMap::new();
        let mut insert = |lang: &str, words: &[&'static str]| {
            tables.insert(lang.to_string(), words.iter().copied().collect());
        };
        insert("javascript", JS_KEYWORDS);
        let ts: Vec<&'static str> = JS_KEYWORDS
            .iter()
            .chain(TS_EXTRA_KEYWORDS.iter())
            .copied()
            .collect();
        insert("typescript", &ts);
        insert("python", PYTHON_KEYWORDS);
        insert("java", JAVA_KEYWORDS);
        insert("css", CSS_KEYWORDS);
        insert("html", HTML_KEYWORDS);
        insert("bash", BASH_KEYWORDS);
        insert("git", GIT_KEYWORDS);
        insert("terminal", BASH_KEYWORDS);
        insert("rust", RUST_KEYWORDS);
        Self {
            tables,
            custom: HashMap::new(),
        }
    }

    /// Override the keyword table for a language (case-insensitive key).
    ///
    /// The custom table takes precedence over any built-in table for the
    /// same language.
    pub fn with_keywords<I, S>(mut self, language: &str, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.custom.insert(
            language.to_ascii_lowercase(),
            keywords.into_iter().map(Into::into).collect(),
        );
        self
    }

    /// Languages with a registered table, built-in or custom.
    #[must_use]
    pub fn knows(&self, language: &str) -> bool {
        let key = language.to_ascii_lowercase();
        self.custom.contains_key(&key) || self.tables.contains_key(&key)
    }

    fn is_keyword(&self, language: &str, word: &str) -> bool {
        if let Some(table) = self.custom.get(language) {
            return table.contains(word);
        }
        self.tables
            .get(language)
            .is_some_and(|table| table.contains(word))
    }

    /// Tokenize `source` using the keyword table for `language`.
    ///
    /// An unknown language still tokenizes strings, comments, and numbers;
    /// it just produces no `Keyword` tokens.
    pub fn tokenize(&self, language: &str, source: &str) -> Vec<Token> {
        let language = language.to_ascii_lowercase();
        let bytes = source.as_bytes();
        let mut tokens = Vec::new();
        let mut text_start = 0usize;
        let mut pos = 0usize;

        // Closes the pending Text run before emitting a non-text token.
        fn flush_text(tokens: &mut Vec<Token>, start: usize, end: usize) {
            if start < end {
                tokens.push(Token::new(TokenKind::Text, start..end));
            }
        }

        while pos < bytes.len() {
            let b = bytes[pos];

            // String literals: single, double, or backtick quoted.
            if b == b'"' || b == b'\'' || b == b'`' {
                if let Some(end) = scan_string(bytes, pos) {
                    flush_text(&mut tokens, text_start, pos);
                    tokens.push(Token::new(TokenKind::Str, pos..end));
                    pos = end;
                    text_start = pos;
                    continue;
                }
                // Unterminated quote stays plain text.
                pos += 1;
                continue;
            }

            // Line comments: `//` everywhere, `#` everywhere. The original
            // renderer applies both regardless of language, so false
            // positives on e.g. CSS colors are accepted.
            if (b == b'/' && bytes.get(pos + 1) == Some(&b'/')) || b == b'#' {
                let end = scan_to_eol(bytes, pos);
                flush_text(&mut tokens, text_start, pos);
                tokens.push(Token::new(TokenKind::Comment, pos..end));
                pos = end;
                text_start = pos;
                continue;
            }

            // Block comments: `/* ... */`, unclosed runs to EOF.
            if b == b'/' && bytes.get(pos + 1) == Some(&b'*') {
                let end = scan_block_comment(bytes, pos);
                flush_text(&mut tokens, text_start, pos);
                tokens.push(Token::new(TokenKind::Comment, pos..end));
                pos = end;
                text_start = pos;
                continue;
            }

            // Numbers: digit run with optional single fraction, only at a
            // word boundary so identifiers like `v2` stay text.
            if b.is_ascii_digit() && !is_word_byte(prev_byte(bytes, pos)) {
                let end = scan_number(bytes, pos);
                flush_text(&mut tokens, text_start, pos);
                tokens.push(Token::new(TokenKind::Number, pos..end));
                pos = end;
                text_start = pos;
                continue;
            }

            // Words: match against the keyword table at word boundaries.
            if is_word_start(b) && !is_word_byte(prev_byte(bytes, pos)) {
                let end = scan_word(bytes, pos);
                let word = &source[pos..end];
                if self.is_keyword(&language, word) {
                    flush_text(&mut tokens, text_start, pos);
                    tokens.push(Token::new(TokenKind::Keyword, pos..end));
                    text_start = end;
                }
                pos = end;
                continue;
            }

            pos += 1;
        }

        flush_text(&mut tokens, text_start, bytes.len());
        tokens
    }
}

// ---------------------------------------------------------------------------
// Scanner helpers
// ---------------------------------------------------------------------------

fn prev_byte(bytes: &[u8], pos: usize) -> Option<u8> {
    pos.checked_sub(1).map(|i| bytes[i])
}

fn is_word_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

fn is_word_byte(b: Option<u8>) -> bool {
    matches!(b, Some(b) if b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
}

/// Scan a quoted string starting at the opening quote. Returns the byte
/// offset just past the closing quote, or `None` if unterminated on this
/// line (strings do not span newlines).
fn scan_string(bytes: &[u8], start: usize) -> Option<usize> {
    let quote = bytes[start];
    let mut pos = start + 1;
    while pos < bytes.len() {
        match bytes[pos] {
            b'\\' if pos + 1 < bytes.len() => pos += 2,
            b'\n' => return None,
            b if b == quote => return Some(pos + 1),
            _ => pos += 1,
        }
    }
    None
}

fn scan_to_eol(bytes: &[u8], start: usize) -> usize {
    let mut pos = start;
    while pos < bytes.len() && bytes[pos] != b'\n' {
        pos += 1;
    }
    pos
}

fn scan_block_comment(bytes: &[u8], start: usize) -> usize {
    let mut pos = start + 2;
    while pos + 1 < bytes.len() {
        if bytes[pos] == b'*' && bytes[pos + 1] == b'/' {
            return pos + 2;
        }
        pos += 1;
    }
    bytes.len()
}

fn scan_number(bytes: &[u8], start: usize) -> usize {
    let mut pos = start;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    if pos < bytes.len()
        && bytes[pos] == b'.'
        && bytes.get(pos + 1).is_some_and(u8::is_ascii_digit)
    {
        pos += 1;
        while pos < bytes.len() && bytes[pos].is_ascii_digit() {
            pos += 1;
        }
    }
    pos
}

fn scan_word(bytes: &[u8], start: usize) -> usize {
    let mut pos = start;
    while pos < bytes.len()
        && (bytes[pos].is_ascii_alphanumeric() || bytes[pos] == b'_' || bytes[pos] == b'-')
    {
        pos += 1;
    }
    pos
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
        tokens.iter().map(|t| t.kind).collect()
    }

    fn covering(tokens: &[Token], source: &str) -> bool {
        let mut pos = 0usize;
        for token in tokens {
            if token.range.start != pos {
                return false;
            }
            pos = token.range.end;
        }
        pos == source.len()
    }

    #[test]
    fn keywords_classified() {
        let hl = Highlighter::new();
        let src = "const x = value";
        let tokens = hl.tokenize("javascript", src);
        assert!(covering(&tokens, src));
        assert_eq!(tokens[0].kind, TokenKind::Keyword);
        assert_eq!(tokens[0].text(src), "const");
        assert_eq!(tokens[1].kind, TokenKind::Text);
    }

    #[test]
    fn strings_scanned() {
        let hl = Highlighter::new();
        let src = r#"let s = "hello world";"#;
        let tokens = hl.tokenize("javascript", src);
        assert!(covering(&tokens, src));
        let s = tokens
            .iter()
            .find(|t| t.kind == TokenKind::Str)
            .expect("string token");
        assert_eq!(s.text(src), "\"hello world\"");
    }

    #[test]
    fn string_escapes_do_not_close() {
        let hl = Highlighter::new();
        let src = r#""a\"b" rest"#;
        let tokens = hl.tokenize("javascript", src);
        assert_eq!(tokens[0].kind, TokenKind::Str);
        assert_eq!(tokens[0].text(src), r#""a\"b""#);
    }

    #[test]
    fn unterminated_string_stays_text() {
        let hl = Highlighter::new();
        let src = "\"never closed";
        let tokens = hl.tokenize("javascript", src);
        assert!(covering(&tokens, src));
        assert!(tokens.iter().all(|t| t.kind != TokenKind::Str));
    }

    #[test]
    fn backtick_strings() {
        let hl = Highlighter::new();
        let src = "`template`";
        let tokens = hl.tokenize("javascript", src);
        assert_eq!(kinds(&tokens), vec![TokenKind::Str]);
    }

    #[test]
    fn line_comments() {
        let hl = Highlighter::new();
        let src = "let x = 1; // trailing\nlet y";
        let tokens = hl.tokenize("javascript", src);
        assert!(covering(&tokens, src));
        let c = tokens
            .iter()
            .find(|t| t.kind == TokenKind::Comment)
            .expect("comment token");
        assert_eq!(c.text(src), "// trailing");
    }

    #[test]
    fn hash_comments() {
        let hl = Highlighter::new();
        let src = "x = 1  # note";
        let tokens = hl.tokenize("python", src);
        let c = tokens
            .iter()
            .find(|t| t.kind == TokenKind::Comment)
            .expect("comment token");
        assert_eq!(c.text(src), "# note");
    }

    #[test]
    fn block_comments_and_unclosed() {
        let hl = Highlighter::new();
        let src = "a /* mid */ b";
        let tokens = hl.tokenize("javascript", src);
        let c = tokens
            .iter()
            .find(|t| t.kind == TokenKind::Comment)
            .expect("comment token");
        assert_eq!(c.text(src), "/* mid */");

        let src = "a /* runs to end";
        let tokens = hl.tokenize("javascript", src);
        assert!(covering(&tokens, src));
        assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Comment));
    }

    #[test]
    fn numbers_at_word_boundaries() {
        let hl = Highlighter::new();
        let src = "x = 42 + 3.14 but v2 stays";
        let tokens = hl.tokenize("javascript", src);
        let nums: Vec<&str> = tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Number)
            .map(|t| t.text(src))
            .collect();
        assert_eq!(nums, vec!["42", "3.14"]);
    }

    #[test]
    fn keywords_case_sensitive() {
        let hl = Highlighter::new();
        let src = "Const CONST const";
        let tokens = hl.tokenize("javascript", src);
        let kws: Vec<&str> = tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Keyword)
            .map(|t| t.text(src))
            .collect();
        assert_eq!(kws, vec!["const"]);
    }

    #[test]
    fn keyword_inside_identifier_not_matched() {
        let hl = Highlighter::new();
        let src = "constant reconst my-const";
        let tokens = hl.tokenize("javascript", src);
        assert!(tokens.iter().all(|t| t.kind != TokenKind::Keyword));
    }

    #[test]
    fn typescript_extends_javascript() {
        let hl = Highlighter::new();
        let src = "interface const";
        let tokens = hl.tokenize("typescript", src);
        let kws: Vec<&str> = tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Keyword)
            .map(|t| t.text(src))
            .collect();
        assert_eq!(kws, vec!["interface", "const"]);
    }

    #[test]
    fn custom_table_overrides_builtin() {
        let hl = Highlighter::new().with_keywords("javascript", ["banana"]);
        let src = "const banana";
        let tokens = hl.tokenize("javascript", src);
        let kws: Vec<&str> = tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Keyword)
            .map(|t| t.text(src))
            .collect();
        assert_eq!(kws, vec!["banana"]);
    }

    #[test]
    fn custom_table_for_unknown_language() {
        let hl = Highlighter::new().with_keywords("mylang", ["frob"]);
        assert!(hl.knows("mylang"));
        let src = "frob the widget";
        let tokens = hl.tokenize("MyLang", src);
        assert_eq!(tokens[0].kind, TokenKind::Keyword);
    }

    #[test]
    fn unknown_language_still_tokenizes_literals() {
        let hl = Highlighter::new();
        let src = "say \"hi\" 7 times";
        let tokens = hl.tokenize("klingon", src);
        assert!(covering(&tokens, src));
        assert!(tokens.iter().any(|t| t.kind == TokenKind::Str));
        assert!(tokens.iter().any(|t| t.kind == TokenKind::Number));
        assert!(tokens.iter().all(|t| t.kind != TokenKind::Keyword));
    }

    #[test]
    fn empty_input() {
        let hl = Highlighter::new();
        assert!(hl.tokenize("javascript", "").is_empty());
    }

    #[test]
    fn tokens_cover_mixed_input() {
        let hl = Highlighter::new();
        let src = "fn main() { let x = \"s\"; // done\n}";
        let tokens = hl.tokenize("rust", src);
        assert!(covering(&tokens, src));
    }
}
