pub fn module_ready() -> bool {
    true
}

pub fn index_html() -> &'static str {
    include_str!("../static/index.html")
}

pub fn styles_css() -> &'static str {
    include_str!("../static/styles.css")
}

pub fn app_js() -> &'static str {
    include_str!("../static/app.js")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ui_bundle_contains_index_html() {
        let html = index_html();

        assert!(html.contains("<!doctype html>"));
        assert!(html.contains("/static/styles.css"));
        assert!(html.contains("/static/app.js"));
    }

    #[test]
    fn ui_shell_contains_game_panels() {
        let html = index_html();

        assert!(html.contains("Matrice des gains"));
        assert!(html.contains("Historique des décisions"));
        assert!(html.contains("Exécuter les décisions"));
        assert!(html.contains("Tour suivant"));
    }

    #[test]
    fn app_script_guards_reset_with_confirmation() {
        let script = app_js();

        assert!(script.contains("window.confirm"));
        assert!(script.contains("{ confirm: true }"));
    }

    #[test]
    fn app_script_talks_to_game_endpoints() {
        let script = app_js();

        for path in [
            "/api/game/select",
            "/api/game/play",
            "/api/game/next-round",
            "/api/game/reset",
            "/api/payoffs",
            "/api/history",
            "/ws/events",
        ] {
            assert!(script.contains(path), "missing {path}");
        }
    }
}
