//! Navigation API endpoint.
//!
//! Returns the sidebar listing, filtered by the same rules the rendered
//! sidebar uses, so client-side consumers stay consistent with the HTML.

use axum::Json;
use axum::extract::Query;
use residocs_site::{SectionId, search};
use serde::{Deserialize, Serialize};

/// Query parameters for GET /api/navigation.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct NavigationParams {
    /// Search query; absent means the full listing.
    q: Option<String>,
}

/// Response for GET /api/navigation.
#[derive(Serialize)]
pub(crate) struct NavigationResponse {
    /// Sections surviving the filter, in sidebar order.
    sections: Vec<SectionResponse>,
}

/// Section item for JSON response.
#[derive(Serialize)]
struct SectionResponse {
    /// Section id (route segment).
    id: SectionId,
    /// Display title.
    title: &'static str,
    /// Icon name (kebab-case).
    icon: &'static str,
    /// Canonical page path.
    path: String,
    /// Subsections kept by the filter.
    subsections: Vec<SubsectionResponse>,
}

/// Subsection item for JSON response.
#[derive(Serialize)]
struct SubsectionResponse {
    /// Slug within the section.
    id: &'static str,
    /// Display title.
    title: &'static str,
    /// Scoped anchor id on the section page.
    anchor: String,
}

/// Handle GET /api/navigation.
pub(crate) async fn get_navigation(
    Query(params): Query<NavigationParams>,
) -> Json<NavigationResponse> {
    let query = params.q.as_deref().unwrap_or("");
    let sections = search::filter_sections(query)
        .into_iter()
        .map(|entry| SectionResponse {
            id: entry.id,
            title: entry.title,
            icon: entry.icon.name(),
            path: entry.path(),
            subsections: entry
                .subsections
                .iter()
                .map(|sub| SubsectionResponse {
                    id: sub.id,
                    title: sub.title,
                    anchor: sub.anchor(entry.id),
                })
                .collect(),
        })
        .collect();
    Json(NavigationResponse { sections })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn navigation(query: &str) -> serde_json::Value {
        let params: NavigationParams = serde_urlencoded::from_str(query).unwrap();
        let Json(response) = tokio_test::block_on(get_navigation(Query(params)));
        serde_json::to_value(&response).unwrap()
    }

    #[test]
    fn test_navigation_without_query_lists_all_sections() {
        let json = navigation("");
        let sections = json["sections"].as_array().unwrap();

        assert_eq!(sections.len(), 9);
        assert_eq!(sections[0]["id"], "commencer");
        assert_eq!(sections[0]["title"], "Introduction");
        assert_eq!(sections[0]["icon"], "book-open");
        assert_eq!(sections[0]["path"], "/documentation/commencer");
        assert_eq!(
            sections[0]["subsections"][0]["anchor"],
            "commencer-a-propos"
        );
    }

    #[test]
    fn test_navigation_title_match_keeps_all_subsections() {
        let json = navigation("q=api");
        let sections = json["sections"].as_array().unwrap();

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0]["id"], "reference-api");
        assert_eq!(sections[0]["subsections"].as_array().unwrap().len(), 5);
    }

    #[test]
    fn test_navigation_subsection_match_keeps_matching_only() {
        let json = navigation("q=chambre");
        let sections = json["sections"].as_array().unwrap();

        let ids: Vec<&str> = sections
            .iter()
            .map(|s| s["id"].as_str().unwrap())
            .collect();
        assert_eq!(
            ids,
            vec!["demarrage-rapide", "guide-utilisateur", "reference-api"]
        );
        assert_eq!(
            sections[1]["subsections"][0]["anchor"],
            "guide-utilisateur-gestion-chambres"
        );
    }

    #[test]
    fn test_navigation_no_match_returns_empty_listing() {
        let json = navigation("q=zzzz");
        assert_eq!(json["sections"].as_array().unwrap().len(), 0);
    }
}
