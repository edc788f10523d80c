// inosmi.ru article adapter.
//
// Articles on inosmi.ru carry their body copy in `div.article__text`
// blocks. Everything else on the page (navigation, teasers, comment
// widgets) is ignored. A page with no such blocks, or only empty ones,
// is not an article this adapter recognizes.

use scraper::{Html, Selector};
use tracing::debug;

use super::{ArticleNotFound, Sanitizer};

pub struct InosmiSanitizer;

impl Sanitizer for InosmiSanitizer {
    fn sanitize(&self, html: &str) -> Result<String, ArticleNotFound> {
        // The selector literal is fixed; parsing it cannot fail.
        let body_selector = Selector::parse("div.article__text").unwrap();

        let document = Html::parse_document(html);
        let mut paragraphs = Vec::new();
        for block in document.select(&body_selector) {
            let text = block.text().collect::<Vec<_>>().join(" ");
            let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
            if !text.is_empty() {
                paragraphs.push(text);
            }
        }

        if paragraphs.is_empty() {
            return Err(ArticleNotFound);
        }

        let body = paragraphs.join("\n");
        debug!(bytes = body.len(), "Extracted article body");
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_article_body_text() {
        let html = r#"
            <html><body>
              <nav>Главная | Политика</nav>
              <div class="article__text"><p>Первый абзац статьи.</p></div>
              <div class="article__text"><p>Второй   абзац.</p></div>
              <footer>Комментарии</footer>
            </body></html>
        "#;
        let text = InosmiSanitizer.sanitize(html).unwrap();
        assert_eq!(text, "Первый абзац статьи.\nВторой абзац.");
    }

    #[test]
    fn rejects_page_without_article_layout() {
        let html = "<html><body><h1>404</h1><p>Страница не найдена</p></body></html>";
        assert!(InosmiSanitizer.sanitize(html).is_err());
    }

    #[test]
    fn rejects_article_block_with_no_text() {
        let html = r#"<div class="article__text">   </div>"#;
        assert!(InosmiSanitizer.sanitize(html).is_err());
    }
}
