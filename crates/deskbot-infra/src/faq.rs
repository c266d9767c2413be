//! FAQ knowledge base loading.
//!
//! Reads the FAQ JSON file (`{"faqs": [{"question", "answer"}, ...]}`)
//! that every generated reply is constrained to.

use std::path::Path;

use anyhow::Context;

use deskbot_types::faq::FaqBook;

/// Load the FAQ book from a JSON file.
///
/// Fails when the file is missing or malformed; an empty FAQ list is
/// accepted but logged, since it turns every reply into a deflection.
pub async fn load_faq_book(path: &Path) -> anyhow::Result<FaqBook> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read FAQ file at {}", path.display()))?;

    let book: FaqBook = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse FAQ file at {}", path.display()))?;

    if book.is_empty() {
        tracing::warn!(path = %path.display(), "FAQ file contains no entries");
    } else {
        tracing::debug!(path = %path.display(), entries = book.len(), "FAQ book loaded");
    }

    Ok(book)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_load_faq_book_parses_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("faqs.json");
        tokio::fs::write(
            &path,
            r#"{"faqs": [
                {"question": "What are your business hours?", "answer": "We are open 9am-5pm Monday to Friday."},
                {"question": "How do I request a refund?", "answer": "Email support within 30 days of purchase."}
            ]}"#,
        )
        .await
        .unwrap();

        let book = load_faq_book(&path).await.unwrap();
        assert_eq!(book.len(), 2);
        assert!(book.faqs[1].answer.contains("30 days"));
    }

    #[tokio::test]
    async fn test_load_faq_book_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.json");

        let err = load_faq_book(&path).await.unwrap_err();
        assert!(err.to_string().contains("failed to read FAQ file"));
    }

    #[tokio::test]
    async fn test_load_faq_book_malformed_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("faqs.json");
        tokio::fs::write(&path, "{not json").await.unwrap();

        let err = load_faq_book(&path).await.unwrap_err();
        assert!(err.to_string().contains("failed to parse FAQ file"));
    }

    #[tokio::test]
    async fn test_load_faq_book_accepts_empty_list() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("faqs.json");
        tokio::fs::write(&path, r#"{"faqs": []}"#).await.unwrap();

        let book = load_faq_book(&path).await.unwrap();
        assert!(book.is_empty());
    }
}
