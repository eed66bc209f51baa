//! HATEOAS link builder
//!
//! Produces `home`, `self` and, when applicable, `next` and `prev` links
//! for a paginated list response.

use super::context::RequestContext;
use crate::config::{LinkConfig, PageCounter};
use crate::params::{keys, QueryParameters};
use crate::types::{Link, LinkRel, ParamValue};

/// Builds navigation links for a list endpoint
#[derive(Debug, Clone, Default)]
pub struct LinkBuilder {
    page_counter: PageCounter,
}

impl LinkBuilder {
    /// Create a builder from config
    pub fn new(config: &LinkConfig) -> Self {
        Self {
            page_counter: config.page_counter,
        }
    }

    /// Build links for the current request.
    ///
    /// `params` is never modified. `nextLast`/`prevLast` entries are taken
    /// out of the working copy and only applied as `last` on the next and
    /// prev links.
    pub fn build(
        &self,
        ctx: &RequestContext,
        params: &QueryParameters,
        has_next: bool,
    ) -> Vec<Link> {
        let mut working = params.clone();
        let next_last = working.remove(keys::NEXT_LAST).and_then(non_empty);
        let prev_last = working.remove(keys::PREV_LAST).and_then(non_empty);

        let base = ctx.base_url();
        let mut links = Vec::with_capacity(4);

        links.push(Link::new(LinkRel::Home, base.clone()));
        links.push(Link::new(LinkRel::SelfRel, with_query(&base, &working)));

        let cursors = Cursors {
            next: next_last,
            prev: prev_last,
        };
        match self.page_counter {
            PageCounter::Running => running(&base, working, cursors, has_next, &mut links),
            PageCounter::Independent => {
                independent(&base, &working, cursors, has_next, &mut links);
            }
        }

        for link in &links {
            tracing::trace!(rel = %link.rel(), href = link.href(), "Built link");
        }
        links
    }
}

/// Build links with the default config
pub fn build_links(ctx: &RequestContext, params: &QueryParameters, has_next: bool) -> Vec<Link> {
    LinkBuilder::default().build(ctx, params, has_next)
}

struct Cursors {
    next: Option<ParamValue>,
    prev: Option<ParamValue>,
}

/// Single page counter shared by the next and prev steps.
///
/// The next step increments `page`; the prev step then subtracts two from
/// whatever `page` holds. Without a next link this means prev points two
/// pages back, and prev inherits the next cursor when no prev cursor is set.
fn running(
    base: &str,
    mut working: QueryParameters,
    cursors: Cursors,
    has_next: bool,
    links: &mut Vec<Link>,
) {
    if has_next {
        let next_page = match working.get(keys::PAGE) {
            Some(ParamValue::Integer(n)) => n.checked_add(1).map(ParamValue::Integer),
            Some(ParamValue::Float(x)) => Some(x + 1.0)
                .filter(|next| next > x)
                .map(ParamValue::Float),
            _ => Some(ParamValue::Integer(2)),
        };
        match next_page {
            Some(page) => {
                working.insert(keys::PAGE, page);
                if let Some(cursor) = cursors.next {
                    working.insert(keys::LAST, cursor);
                }
                links.push(Link::new(LinkRel::Next, with_query(base, &working)));
            }
            None => tracing::debug!("Page counter at its maximum, omitting next link"),
        }
    }

    let prev_page = match working.get(keys::PAGE) {
        Some(ParamValue::Integer(n)) if *n > 2 => ParamValue::Integer(n - 2),
        Some(ParamValue::Float(x)) if *x > 2.0 && x - 2.0 < *x => ParamValue::Float(x - 2.0),
        _ => return,
    };
    let keep_query = match prev_page {
        ParamValue::Integer(n) => n > 1,
        ParamValue::Float(x) => x > 1.0,
        ParamValue::Text(_) => false,
    };

    working.insert(keys::PAGE, prev_page);
    if let Some(cursor) = cursors.prev {
        working.insert(keys::LAST, cursor);
    }

    let href = if keep_query {
        with_query(base, &working)
    } else {
        base.to_string()
    };
    links.push(Link::new(LinkRel::Prev, href));
}

/// next = requested + 1, prev = requested - 1, each decided on its own
fn independent(
    base: &str,
    working: &QueryParameters,
    cursors: Cursors,
    has_next: bool,
    links: &mut Vec<Link>,
) {
    let requested = working.page().unwrap_or(1);

    if has_next {
        match requested.checked_add(1) {
            Some(next_page) => {
                let mut next = working.clone();
                next.insert(keys::PAGE, next_page);
                if let Some(cursor) = cursors.next {
                    next.insert(keys::LAST, cursor);
                }
                links.push(Link::new(LinkRel::Next, with_query(base, &next)));
            }
            None => tracing::debug!("Page counter at its maximum, omitting next link"),
        }
    }

    if requested > 1 {
        let prev_page = requested - 1;
        let href = if prev_page > 1 {
            let mut prev = working.clone();
            prev.insert(keys::PAGE, prev_page);
            if let Some(cursor) = cursors.prev {
                prev.insert(keys::LAST, cursor);
            }
            with_query(base, &prev)
        } else {
            base.to_string()
        };
        links.push(Link::new(LinkRel::Prev, href));
    }
}

fn with_query(base: &str, params: &QueryParameters) -> String {
    if params.is_empty() {
        base.to_string()
    } else {
        format!("{base}?{}", params.to_query_string())
    }
}

fn non_empty(value: ParamValue) -> Option<ParamValue> {
    match &value {
        ParamValue::Text(s) if s.is_empty() => None,
        _ => Some(value),
    }
}
