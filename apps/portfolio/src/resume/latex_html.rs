//! Built-in, best-effort LaTeX to HTML conversion used when no external tool works.
//!
//! Only a fixed subset of markup is understood. Each closing brace is matched to
//! whatever opened it, so nested constructs close in the right order. Unknown
//! commands are dropped while the text inside their brace groups is kept.

use crate::resume::engine::RESUME_STYLESHEET;

const BEGIN_DOCUMENT: &str = "\\begin{document}";
const END_DOCUMENT: &str = "\\end{document}";
const MISSING_BODY: &str = "<p>Error: Could not find document content</p>";

/// Converts a complete LaTeX document into a standalone HTML page.
pub trait LatexToHtml: Send + Sync {
    fn render(&self, document: &str) -> String;
}

pub struct BasicLatexConverter {
    title: String,
    stylesheet: String,
}

impl BasicLatexConverter {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            stylesheet: RESUME_STYLESHEET.to_string(),
        }
    }
}

impl LatexToHtml for BasicLatexConverter {
    fn render(&self, document: &str) -> String {
        let body = match extract_body(document) {
            Some(body) => convert_markup(body),
            None => MISSING_BODY.to_string(),
        };

        format!(
            "<!DOCTYPE html>\n\
             <html lang=\"en\">\n\
             <head>\n    \
             <meta charset=\"UTF-8\">\n    \
             <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n    \
             <title>{}</title>\n    \
             <link rel=\"stylesheet\" href=\"{}\">\n\
             </head>\n\
             <body>\n{}\n</body>\n</html>\n",
            escape_html(&self.title),
            escape_html(&self.stylesheet),
            body
        )
    }
}

/// Text between `\begin{document}` and the following `\end{document}`.
fn extract_body(document: &str) -> Option<&str> {
    let start = document.find(BEGIN_DOCUMENT)? + BEGIN_DOCUMENT.len();
    let end = document[start..].find(END_DOCUMENT)? + start;
    Some(&document[start..end])
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        push_escaped(&mut out, c);
    }
    out
}

fn push_escaped(out: &mut String, c: char) {
    match c {
        '&' => out.push_str("&amp;"),
        '<' => out.push_str("&lt;"),
        '>' => out.push_str("&gt;"),
        '"' => out.push_str("&quot;"),
        _ => out.push(c),
    }
}

/// How a command with brace arguments maps onto HTML.
struct Rule {
    open: &'static str,
    /// Opening and closing text wrapped around each brace argument, in order.
    args: &'static [(&'static str, &'static str)],
    close: &'static str,
    /// Argument content is discarded (lengths, labels).
    suppress: bool,
}

const fn wrap(open: &'static str, args: &'static [(&'static str, &'static str)]) -> Rule {
    Rule {
        open,
        args,
        close: "",
        suppress: false,
    }
}

static BOLD: Rule = wrap("", &[("<strong>", "</strong>")]);
static ITALIC: Rule = wrap("", &[("<em>", "</em>")]);
static UNDERLINE: Rule = wrap("", &[("<u>", "</u>")]);
static MONO: Rule = wrap("", &[("<code>", "</code>")]);
static SECTION: Rule = wrap("", &[("<h2>", "</h2>")]);
static SUBSECTION: Rule = wrap("", &[("<h3>", "</h3>")]);
static LINK_TEXT: Rule = wrap("", &[("", "</a>")]);
static RESUME_ITEM: Rule = wrap("", &[("<li>", "</li>")]);
static SUBHEADING: Rule = Rule {
    open: "<div class=\"resumeSubheading\">",
    args: &[
        ("<span>", "</span>"),
        ("<span>", "</span>"),
        ("<span>", "</span>"),
        ("<span>", "</span>"),
    ],
    close: "</div>",
    suppress: false,
};
static PROJECT_HEADING: Rule = Rule {
    open: "<div class=\"resumeProjectHeading\">",
    args: &[("<span>", "</span>"), ("<span>", "</span>")],
    close: "</div>",
    suppress: false,
};
static DISCARD: Rule = Rule {
    open: "",
    args: &[("", "")],
    close: "",
    suppress: true,
};

fn command_rule(name: &str) -> Option<&'static Rule> {
    match name {
        "textbf" => Some(&BOLD),
        "textit" | "emph" => Some(&ITALIC),
        "underline" => Some(&UNDERLINE),
        "texttt" => Some(&MONO),
        "section" | "section*" => Some(&SECTION),
        "subsection" | "subsection*" => Some(&SUBSECTION),
        "resumeItem" => Some(&RESUME_ITEM),
        "resumeSubheading" => Some(&SUBHEADING),
        "resumeProjectHeading" => Some(&PROJECT_HEADING),
        "vspace" | "hspace" | "label" | "extracolsep" => Some(&DISCARD),
        _ => None,
    }
}

/// Returns the HTML for an environment boundary and how many brace groups of
/// environment arguments follow `\begin{name}`.
fn environment(name: &str) -> (&'static str, &'static str, usize) {
    match name {
        "itemize" => ("<ul>", "</ul>", 0),
        "enumerate" => ("<ol>", "</ol>", 0),
        "center" => ("<div class=\"center\">", "</div>", 0),
        "tabular" => ("", "", 1),
        "tabular*" | "tabularx" => ("", "", 2),
        _ => ("", "", 0),
    }
}

enum Frame {
    Group,
    Arg { rule: &'static Rule, index: usize },
}

struct Converter {
    chars: Vec<char>,
    pos: usize,
    out: String,
    stack: Vec<Frame>,
    suppress: usize,
}

fn convert_markup(body: &str) -> String {
    let mut converter = Converter {
        chars: body.chars().collect(),
        pos: 0,
        out: String::with_capacity(body.len()),
        stack: Vec::new(),
        suppress: 0,
    };
    converter.run();
    collapse_blank_lines(&converter.out)
}

impl Converter {
    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn emit(&mut self, text: &str) {
        if self.suppress == 0 {
            self.out.push_str(text);
        }
    }

    fn emit_char(&mut self, c: char) {
        if self.suppress == 0 {
            push_escaped(&mut self.out, c);
        }
    }

    fn run(&mut self) {
        while let Some(c) = self.peek() {
            match c {
                '\\' => self.command(),
                '{' => {
                    self.pos += 1;
                    self.stack.push(Frame::Group);
                }
                '}' => {
                    self.pos += 1;
                    self.close_frame();
                }
                '%' => self.skip_comment(),
                '$' => self.pos += 1,
                '~' => {
                    self.pos += 1;
                    self.emit("&nbsp;");
                }
                '-' if self.peek_at(1) == Some('-') => {
                    if self.peek_at(2) == Some('-') {
                        self.pos += 3;
                        self.emit("&mdash;");
                    } else {
                        self.pos += 2;
                        self.emit("&ndash;");
                    }
                }
                _ => {
                    self.pos += 1;
                    self.emit_char(c);
                }
            }
        }

        // Close anything left open so the fragment stays well formed.
        while let Some(frame) = self.stack.pop() {
            if let Frame::Arg { rule, index } = frame {
                if rule.suppress {
                    self.suppress -= 1;
                }
                self.emit(rule.args[index].1);
                self.emit(rule.close);
            }
        }
    }

    fn command(&mut self) {
        self.pos += 1; // backslash
        let Some(next) = self.peek() else {
            return;
        };

        if !next.is_ascii_alphabetic() {
            self.pos += 1;
            match next {
                '\\' => self.emit("<br>"),
                '&' | '$' | '%' | '#' | '_' | '{' | '}' => self.emit_char(next),
                ' ' | ',' => self.emit(" "),
                _ => {}
            }
            return;
        }

        let start = self.pos;
        while self.peek().is_some_and(|c| c.is_ascii_alphabetic()) {
            self.pos += 1;
        }
        let mut name: String = self.chars[start..self.pos].iter().collect();
        if self.peek() == Some('*') {
            self.pos += 1;
            name.push('*');
        }

        match name.as_str() {
            "begin" => self.begin_environment(),
            "end" => {
                if let Some(env) = self.read_braced_word() {
                    let (_, close, _) = environment(&env);
                    self.emit(close);
                }
            }
            "href" => self.link(),
            "item" => {
                self.skip_optional_arg();
                self.skip_inline_spaces();
                self.emit("<li>");
            }
            _ => match command_rule(&name) {
                Some(rule) => {
                    self.emit(rule.open);
                    if !self.open_arg(rule, 0) {
                        self.emit(rule.close);
                    }
                }
                // Unknown control word: drop it and the spaces LaTeX would swallow.
                None => self.skip_inline_spaces(),
            },
        }
    }

    /// `\href{url}{text}`. The URL is copied verbatim, so `%` and `~` keep their
    /// literal meaning there.
    fn link(&mut self) {
        let Some(url) = self.read_raw_group() else {
            return;
        };
        let href = format!("<a href=\"{}\">", escape_html(url.trim()));
        self.emit(&href);
        if !self.open_arg(&LINK_TEXT, 0) {
            self.emit("</a>");
        }
    }

    /// Reads a balanced `{...}` (whitespace allowed before it) without interpreting
    /// markup. Escaped specials such as `\%` and `\#` become the bare character.
    fn read_raw_group(&mut self) -> Option<String> {
        let mut lookahead = self.pos;
        while self.chars.get(lookahead).is_some_and(|c| c.is_whitespace()) {
            lookahead += 1;
        }
        if self.chars.get(lookahead) != Some(&'{') {
            return None;
        }
        lookahead += 1;

        let mut depth = 1usize;
        let mut text = String::new();
        while let Some(&c) = self.chars.get(lookahead) {
            lookahead += 1;
            match c {
                '\\' => match self.chars.get(lookahead) {
                    Some(&next) if !next.is_ascii_alphabetic() => {
                        text.push(next);
                        lookahead += 1;
                    }
                    _ => text.push(c),
                },
                '{' => {
                    depth += 1;
                    text.push(c);
                }
                '}' => {
                    depth -= 1;
                    if depth == 0 {
                        break;
                    }
                    text.push(c);
                }
                _ => text.push(c),
            }
        }
        self.pos = lookahead;
        Some(text)
    }

    /// Opens argument `index` of `rule` if a brace group follows (whitespace allowed).
    fn open_arg(&mut self, rule: &'static Rule, index: usize) -> bool {
        let mut lookahead = self.pos;
        while self.chars.get(lookahead).is_some_and(|c| c.is_whitespace()) {
            lookahead += 1;
        }
        if self.chars.get(lookahead) != Some(&'{') {
            return false;
        }
        self.pos = lookahead + 1;
        self.emit(rule.args[index].0);
        if rule.suppress {
            self.suppress += 1;
        }
        self.stack.push(Frame::Arg { rule, index });
        true
    }

    fn close_frame(&mut self) {
        match self.stack.pop() {
            Some(Frame::Arg { rule, index }) => {
                if rule.suppress {
                    self.suppress -= 1;
                }
                self.emit(rule.args[index].1);
                if index + 1 >= rule.args.len() || !self.open_arg(rule, index + 1) {
                    self.emit(rule.close);
                }
            }
            // Plain group, or a stray closing brace.
            Some(Frame::Group) | None => {}
        }
    }

    fn begin_environment(&mut self) {
        let Some(env) = self.read_braced_word() else {
            return;
        };
        let (open, _, arg_groups) = environment(&env);
        self.emit(open);
        self.skip_optional_arg();
        for _ in 0..arg_groups {
            self.skip_optional_arg();
            self.skip_raw_group();
        }
    }

    /// Reads `{word}` directly after a command, returning the word.
    fn read_braced_word(&mut self) -> Option<String> {
        self.skip_inline_spaces();
        if self.peek() != Some('{') {
            return None;
        }
        let start = self.pos + 1;
        let end = start + self.chars[start..].iter().position(|c| *c == '}')?;
        self.pos = end + 1;
        Some(self.chars[start..end].iter().collect::<String>().trim().to_string())
    }

    /// Skips a balanced `[...]` if one follows.
    fn skip_optional_arg(&mut self) {
        self.skip_delimited('[', ']');
    }

    /// Skips a balanced `{...}` without interpreting it.
    fn skip_raw_group(&mut self) {
        self.skip_delimited('{', '}');
    }

    fn skip_delimited(&mut self, open: char, close: char) {
        let mut lookahead = self.pos;
        while self.chars.get(lookahead).is_some_and(|c| *c == ' ' || *c == '\t') {
            lookahead += 1;
        }
        if self.chars.get(lookahead) != Some(&open) {
            return;
        }
        let mut depth = 0usize;
        while let Some(&c) = self.chars.get(lookahead) {
            lookahead += 1;
            if c == open {
                depth += 1;
            } else if c == close {
                depth -= 1;
                if depth == 0 {
                    break;
                }
            }
        }
        self.pos = lookahead;
    }

    fn skip_inline_spaces(&mut self) {
        while self.peek().is_some_and(|c| c == ' ' || c == '\t') {
            self.pos += 1;
        }
    }

    fn skip_comment(&mut self) {
        while self.peek().is_some_and(|c| c != '\n') {
            self.pos += 1;
        }
    }
}

fn collapse_blank_lines(html: &str) -> String {
    html.lines()
        .map(str::trim_end)
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
