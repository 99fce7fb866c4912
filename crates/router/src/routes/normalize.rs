use finclub_types::{FRAGMENT_DELIMITER, ROUTE_SEPARATOR, RouteId};

/// A parent route and the shorthand fragments that resolve beneath it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AliasGroup {
    /// Parent route, also accepted as an alias of itself.
    pub prefix: &'static str,
    /// Child segments accepted bare (`club` -> `about/club`).
    pub children: &'static [&'static str],
}

impl AliasGroup {
    /// Canonical routes this group can produce, parent first.
    pub fn targets(&self) -> impl Iterator<Item = RouteId> + '_ {
        std::iter::once(RouteId::new(self.prefix)).chain(self.children.iter().map(|child| self.child_route(child)))
    }

    fn child_route(&self, child: &str) -> RouteId {
        RouteId::new(format!("{}{ROUTE_SEPARATOR}{child}", self.prefix))
    }

    fn resolve(&self, segment: &str) -> Option<RouteId> {
        if segment == self.prefix {
            return Some(RouteId::new(self.prefix));
        }
        self.children.iter().find(|child| **child == segment).map(|child| self.child_route(child))
    }
}

/// Shorthand fragments accepted for the two nested sections of the site.
pub const ALIAS_GROUPS: &[AliasGroup] = &[
    AliasGroup {
        prefix: "about",
        children: &["club", "team", "testimonials"],
    },
    AliasGroup {
        prefix: "olympiad",
        children: &["regulations", "stages", "awards"],
    },
];

/// Resolves any fragment string to exactly one route identifier.
///
/// Leading delimiters are stripped and an empty remainder is `home`. Inputs
/// that already contain a separator pass through untouched; single segments
/// are checked against [`ALIAS_GROUPS`] and otherwise returned as-is. The
/// result is not validated against the route table, so unknown routes
/// survive normalization and are handled by the navigator.
///
/// The function is idempotent: its output is always a fixed point.
pub fn normalize(fragment: &str) -> RouteId {
    let trimmed = fragment.trim_start_matches(FRAGMENT_DELIMITER);
    if trimmed.is_empty() {
        return RouteId::home();
    }
    if trimmed.contains(ROUTE_SEPARATOR) {
        return RouteId::new(trimmed);
    }
    ALIAS_GROUPS
        .iter()
        .find_map(|group| group.resolve(trimmed))
        .unwrap_or_else(|| RouteId::new(trimmed))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm(input: &str) -> String {
        normalize(input).as_str().to_string()
    }

    #[test]
    fn empty_and_bare_delimiter_resolve_home() {
        assert_eq!(norm(""), "home");
        assert_eq!(norm("#"), "home");
        assert_eq!(norm("##"), "home");
    }

    #[test]
    fn aliases_resolve_to_nested_routes() {
        for (alias, expected) in [
            ("club", "about/club"),
            ("team", "about/team"),
            ("testimonials", "about/testimonials"),
            ("regulations", "olympiad/regulations"),
            ("stages", "olympiad/stages"),
            ("awards", "olympiad/awards"),
        ] {
            assert_eq!(norm(alias), expected, "alias {alias}");
            assert_eq!(norm(&format!("#{alias}")), expected, "fragment #{alias}");
            assert_eq!(normalize(alias), normalize(expected));
        }
    }

    #[test]
    fn section_roots_resolve_to_themselves() {
        assert_eq!(norm("about"), "about");
        assert_eq!(norm("#olympiad"), "olympiad");
    }

    #[test]
    fn nested_and_unknown_inputs_pass_through() {
        assert_eq!(norm("#about/team"), "about/team");
        assert_eq!(norm("olympiad/unknown"), "olympiad/unknown");
        assert_eq!(norm("misc/club"), "misc/club");
        assert_eq!(norm("contacts"), "contacts");
        assert_eq!(norm("xyz"), "xyz");
    }

    #[test]
    fn aliases_are_case_sensitive() {
        assert_eq!(norm("Club"), "Club");
    }

    #[test]
    fn normalization_is_idempotent() {
        let inputs = [
            "", "#", "##club", "#club", "club", "about", "about/club", "#about/club", "olympiad/stages", "stages", "xyz",
            "#xyz", "/", "a/b/c", "home", "#home", " club", "contacts",
        ];
        for input in inputs {
            let once = normalize(input);
            assert_eq!(normalize(once.as_str()), once, "input {input:?}");
        }
    }

    #[test]
    fn group_targets_list_parent_then_children() {
        let targets: Vec<_> = ALIAS_GROUPS[0].targets().map(|route| route.to_string()).collect();
        assert_eq!(targets, vec!["about", "about/club", "about/team", "about/testimonials"]);
    }
}
