use lazy_static::lazy_static;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::model::{MangaStatus, StatusTypes};
use crate::parse_error::{ParseError, Result};

pub mod date;

lazy_static! {
    static ref NUMBER: Regex = Regex::new(r"\d+(?:[.,]\d+)?").unwrap();
    static ref SUB_DOMAIN: Regex = Regex::new(r"^.+\.([^.]+\.[^.]+)$").unwrap();
}

const PSEUDOS: [&str; 3] = [":contains(", ":icontains(", ":has("];

pub fn parse_document(html: &str) -> Html {
    Html::parse_document(html)
}

/// Parse [html] and hand it to [f]. The document is gone by the time this
/// returns, which keeps it out of any future.
pub fn map_document<T>(html: &str, f: impl FnOnce(&Html) -> T) -> T {
    let doc = parse_document(html);
    f(&doc)
}

///
/// Return the result of the first selector that matches anything
///
/// # Example
/// query = "a, p[example], p";
/// where body is
/// <div>
///     <p example>hello</p>
/// </div>
/// will only return 1 p
/// instead of 2
///
/// On top of plain CSS, `:contains(text)`, `:icontains(text)` and
/// `:has(selector)` are understood. A selector that does not parse is logged
/// and matches nothing.
pub fn select<'a>(root: ElementRef<'a>, query: &str) -> Vec<ElementRef<'a>> {
    for alternative in split_top_level(query, ',') {
        let elements = select_query(root, alternative);
        if !elements.is_empty() {
            return elements;
        }
    }
    vec![]
}

pub fn select_first<'a>(root: ElementRef<'a>, query: &str) -> Option<ElementRef<'a>> {
    select(root, query).into_iter().next()
}

/// All matches, or nothing when there is no selector
pub fn resolve_all<'a>(root: ElementRef<'a>, query: Option<&str>) -> Vec<ElementRef<'a>> {
    query.map(|query| select(root, query)).unwrap_or_default()
}

/// if [query] is None, [root] is used
pub fn select_or_self<'a>(root: ElementRef<'a>, query: Option<&str>) -> Option<ElementRef<'a>> {
    match query {
        Some(query) => select_first(root, query),
        None => Some(root),
    }
}

pub fn resolve_text(root: ElementRef, query: Option<&str>) -> Option<String> {
    query
        .and_then(|query| select_first(root, query))
        .and_then(element_text)
}

pub fn resolve_attr(root: ElementRef, query: Option<&str>, attrs: &[&str]) -> Option<String> {
    select_or_self(root, query).and_then(|element| first_attr(element, attrs))
}

/// Whitespace collapsed, `None` when nothing is left
pub fn element_text(element: ElementRef) -> Option<String> {
    let text = element.text().collect::<String>();
    let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

pub fn first_attr(element: ElementRef, attrs: &[&str]) -> Option<String> {
    attrs
        .iter()
        .filter_map(|attr| element.value().attr(attr))
        .map(str::trim)
        .find(|value| !value.is_empty())
        .map(String::from)
}

pub fn merge_vec_with_default<'a>(attrs: &'a [String], default: Vec<&'a str>) -> Vec<&'a str> {
    let mut all_attrs: Vec<&str> = attrs.iter().map(String::as_str).collect();

    for attr in default {
        if !all_attrs.contains(&attr) {
            all_attrs.push(attr);
        }
    }

    all_attrs
}

/// Make [raw] absolute against the origin of [base]
///
/// Inline `data:` images and non-http schemes give `None`.
pub fn absolute_url(base: &Url, raw: &str) -> Option<Url> {
    let raw = raw.trim();
    if raw.is_empty() || raw.starts_with("data:") {
        return None;
    }
    let url = match Url::parse(raw) {
        Ok(url) => url,
        Err(_) => {
            let mut base = base.clone();
            base.set_path("/");
            base.set_query(None);
            base.join(raw).ok()?
        }
    };
    matches!(url.scheme(), "http" | "https").then_some(url)
}

/// Last non-empty path segment, `/series/this-is-the-law/` gives `this-is-the-law`
pub fn path_id(url: &Url) -> Option<String> {
    url.path_segments()?
        .filter(|segment| !segment.is_empty())
        .last()
        .map(String::from)
}

pub fn get_hostname(url: &Url) -> Result<String> {
    let hostname = url
        .host_str()
        .ok_or(ParseError::MissingHostname(url.to_string()))?;
    let hostname = SUB_DOMAIN.replace(hostname, "$1").into_owned();

    Ok(hostname)
}

pub fn string_to_status(status: &str, types: &StatusTypes) -> MangaStatus {
    let status = status.trim().to_lowercase();
    let matches = |synonyms: &[String], exact: bool| {
        synonyms.iter().any(|synonym| {
            let synonym = synonym.trim().to_lowercase();
            !synonym.is_empty() && if exact { status == synonym } else { status.contains(&synonym) }
        })
    };

    for exact in [true, false] {
        if matches(&types.ongoing, exact) {
            return MangaStatus::Ongoing;
        }
        if matches(&types.completed, exact) {
            return MangaStatus::Completed;
        }
    }
    MangaStatus::Unknown
}

/// Last number in [text], `NaN` if there is none
pub fn parse_chapter_number(text: &str) -> f32 {
    NUMBER
        .find_iter(text)
        .last()
        .and_then(|number| number.as_str().replace(',', ".").parse().ok())
        .unwrap_or(f32::NAN)
}

pub fn parse_rating(text: &str) -> Option<f32> {
    NUMBER
        .find(text)
        .and_then(|number| number.as_str().replace(',', ".").parse().ok())
}

fn css<'a>(root: ElementRef<'a>, query: &str) -> Vec<ElementRef<'a>> {
    match Selector::parse(query) {
        Ok(selector) => root.select(&selector).collect(),
        Err(e) => {
            warn!("Invalid selector '{}': {:?}", query, e);
            vec![]
        }
    }
}

fn select_query<'a>(root: ElementRef<'a>, query: &str) -> Vec<ElementRef<'a>> {
    let query = query.trim();
    if query.is_empty() {
        return vec![];
    }
    let Some(pseudo) = Pseudo::split(query) else {
        return css(root, query);
    };

    let head = pseudo.head.trim_start();
    let head = if head.is_empty() || head.ends_with(|c: char| c.is_whitespace() || "<>+~".contains(c)) {
        format!("{head}*")
    } else {
        head.to_owned()
    };

    let candidates = select_query(root, &head)
        .into_iter()
        .filter(|element| pseudo.accepts(*element))
        .collect();

    apply_tail(candidates, pseudo.tail)
}

fn apply_tail<'a>(candidates: Vec<ElementRef<'a>>, tail: &str) -> Vec<ElementRef<'a>> {
    if tail.trim().is_empty() || candidates.is_empty() {
        return candidates;
    }

    // Directly attached, like `.active` after `:contains(x)`
    if !tail.starts_with(|c: char| c.is_whitespace() || ">+~".contains(c)) {
        let (compound, rest) = split_compound(tail);
        let filtered = candidates
            .into_iter()
            .filter(|element| matches_compound(*element, compound))
            .collect();
        return apply_tail(filtered, rest);
    }

    let tail = tail.trim_start();
    let combinator = tail.chars().next().filter(|c| ">+~".contains(*c));
    let Some(combinator) = combinator else {
        let mut found = vec![];
        for element in candidates {
            for child in select_query(element, tail) {
                if !found.iter().any(|known: &ElementRef| known.id() == child.id()) {
                    found.push(child);
                }
            }
        }
        return found;
    };

    let (compound, rest) = split_compound(tail[1..].trim_start());
    let mut found: Vec<ElementRef> = vec![];
    for element in candidates {
        let next: Vec<ElementRef> = match combinator {
            '>' => element.children().filter_map(ElementRef::wrap).collect(),
            '+' => element
                .next_siblings()
                .filter_map(ElementRef::wrap)
                .take(1)
                .collect(),
            _ => element.next_siblings().filter_map(ElementRef::wrap).collect(),
        };
        for candidate in next {
            if matches_compound(candidate, compound)
                && !found.iter().any(|known| known.id() == candidate.id())
            {
                found.push(candidate);
            }
        }
    }
    apply_tail(found, rest)
}

fn matches_compound(element: ElementRef, compound: &str) -> bool {
    let compound = compound.trim();
    if compound.is_empty() {
        return true;
    }
    match Pseudo::split(compound) {
        Some(pseudo) => {
            matches_compound(element, pseudo.head)
                && pseudo.accepts(element)
                && matches_compound(element, pseudo.tail)
        }
        None => match Selector::parse(compound) {
            Ok(selector) => selector.matches(&element),
            Err(e) => {
                warn!("Invalid selector '{}': {:?}", compound, e);
                false
            }
        },
    }
}

/// A jQuery style pseudo class that the css engine does not know
struct Pseudo<'q> {
    head: &'q str,
    name: &'q str,
    argument: &'q str,
    tail: &'q str,
}

impl<'q> Pseudo<'q> {
    fn split(query: &'q str) -> Option<Self> {
        let (start, name) = PSEUDOS
            .iter()
            .filter_map(|pseudo| query.find(pseudo).map(|index| (index, *pseudo)))
            .min_by_key(|(index, _)| *index)?;
        let open = start + name.len();
        let close = closing_paren(query, open)?;

        Some(Self {
            head: &query[..start],
            name: &name[1..name.len() - 1],
            argument: query[open..close].trim().trim_matches(|c| c == '"' || c == '\''),
            tail: &query[close + 1..],
        })
    }

    fn accepts(&self, element: ElementRef) -> bool {
        match self.name {
            "has" => !select(element, self.argument).is_empty(),
            "icontains" => element_text(element)
                .map(|text| text.to_lowercase().contains(&self.argument.to_lowercase()))
                .unwrap_or(false),
            _ => element_text(element)
                .map(|text| text.contains(self.argument))
                .unwrap_or(false),
        }
    }
}

fn closing_paren(query: &str, open: usize) -> Option<usize> {
    let mut depth = 1;
    for (index, c) in query[open..].char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(open + index);
                }
            }
            _ => {}
        }
    }
    None
}

/// Split on [separator] outside of parentheses and brackets
fn split_top_level(query: &str, separator: char) -> Vec<&str> {
    let mut parts = vec![];
    let mut depth = 0i32;
    let mut start = 0;
    for (index, c) in query.char_indices() {
        match c {
            '(' | '[' => depth += 1,
            ')' | ']' => depth -= 1,
            c if c == separator && depth == 0 => {
                parts.push(query[start..index].trim());
                start = index + c.len_utf8();
            }
            _ => {}
        }
    }
    parts.push(query[start..].trim());
    parts.into_iter().filter(|part| !part.is_empty()).collect()
}

/// First compound selector of [query] and everything after it
fn split_compound(query: &str) -> (&str, &str) {
    let mut depth = 0i32;
    for (index, c) in query.char_indices() {
        match c {
            '(' | '[' => depth += 1,
            ')' | ']' => depth -= 1,
            c if depth == 0 && (c.is_whitespace() || ">+~".contains(c)) => {
                return (&query[..index], &query[index..]);
            }
            _ => {}
        }
    }
    (query, "")
}
