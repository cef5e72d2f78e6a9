/// HTML-страницы сайта (входные точки сборки)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SitePage {
    Index,
    AboutUs,
    Services,
    Approach,
    Contact,
    Privacy,
    Terms,
    Stack,
    NotFound,
}

impl SitePage {
    /// Имя файла страницы относительно корня сайта
    pub fn file_name(&self) -> &'static str {
        match self {
            SitePage::Index => "index.html",
            SitePage::AboutUs => "about-us.html",
            SitePage::Services => "services.html",
            SitePage::Approach => "approach.html",
            SitePage::Contact => "contact.html",
            SitePage::Privacy => "privacy.html",
            SitePage::Terms => "terms.html",
            SitePage::Stack => "stack.html",
            SitePage::NotFound => "404.html",
        }
    }

    /// Страницы, в которых после сборки переписываются ссылки на ассеты
    pub fn is_patched_by_default(&self) -> bool {
        matches!(
            self,
            SitePage::Index
                | SitePage::AboutUs
                | SitePage::Services
                | SitePage::Approach
                | SitePage::Contact
        )
    }

    pub fn all() -> [SitePage; 9] {
        [
            SitePage::Index,
            SitePage::AboutUs,
            SitePage::Services,
            SitePage::Approach,
            SitePage::Contact,
            SitePage::Privacy,
            SitePage::Terms,
            SitePage::Stack,
            SitePage::NotFound,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patched_pages() {
        let patched: Vec<_> = SitePage::all()
            .into_iter()
            .filter(SitePage::is_patched_by_default)
            .map(|p| p.file_name())
            .collect();
        assert_eq!(
            patched,
            vec![
                "index.html",
                "about-us.html",
                "services.html",
                "approach.html",
                "contact.html"
            ]
        );
    }
}
