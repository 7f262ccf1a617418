use docsearch_core::{DocumentStatus, SearchConfig, SearchError, SearchServer, SharedSearchServer};
use std::thread;

const EPS: f64 = 1e-9;

fn pets() -> SearchServer {
    let mut server = SearchServer::with_stop_words("and the");
    server.add_document(0, "white cat and fancy collar", DocumentStatus::Actual, &[8, -3]).unwrap();
    server.add_document(1, "fluffy cat fluffy tail", DocumentStatus::Actual, &[7, 2, 7]).unwrap();
    server.add_document(2, "groomed dog expressive eyes", DocumentStatus::Actual, &[5, -12, 2, 1]).unwrap();
    server.add_document(3, "groomed starling eugene", DocumentStatus::Banned, &[9]).unwrap();
    server
}

#[test]
fn ranks_actual_documents_by_tf_idf() {
    let server = pets();
    let top = server.find_top_documents("fluffy groomed cat").unwrap();
    let ids: Vec<u32> = top.iter().map(|d| d.id).collect();
    assert_eq!(ids, vec![1, 0, 2]);

    let ln2 = 2f64.ln();
    let ln4 = 4f64.ln();
    assert!((top[0].relevance - (0.5 * ln4 + 0.25 * ln2)).abs() < EPS);
    assert!((top[1].relevance - 0.25 * ln2).abs() < EPS);
    assert!((top[2].relevance - 0.25 * ln2).abs() < EPS);
    assert_eq!(top.iter().map(|d| d.rating).collect::<Vec<_>>(), vec![5, 2, -1]);
}

#[test]
fn status_filter_selects_banned_only() {
    let server = pets();
    let banned = server.find_top_documents_with_status("fluffy groomed cat", DocumentStatus::Banned).unwrap();
    assert_eq!(banned.len(), 1);
    assert_eq!(banned[0].id, 3);
    assert_eq!(banned[0].rating, 9);
    assert!((banned[0].relevance - 2f64.ln() / 3.0).abs() < EPS);
    assert!(server.find_top_documents_with_status("fluffy groomed cat", DocumentStatus::Removed).unwrap().is_empty());
}

#[test]
fn minus_word_excludes_regardless_of_score() {
    let server = pets();
    assert!(server.find_top_documents("-cat fluffy").unwrap().is_empty());
    let top = server.find_top_documents("-cat groomed").unwrap();
    assert_eq!(top.iter().map(|d| d.id).collect::<Vec<_>>(), vec![2]);
}

#[test]
fn match_document_lists_sorted_words() {
    let server = pets();
    let m = server.match_document("fluffy groomed cat", 1).unwrap();
    assert_eq!(m.words, vec!["cat", "fluffy"]);
    assert_eq!(m.status, DocumentStatus::Actual);

    let m = server.match_document("fluffy groomed cat", 3).unwrap();
    assert_eq!(m.words, vec!["groomed"]);
    assert_eq!(m.status, DocumentStatus::Banned);

    let m = server.match_document("-cat fluffy", 1).unwrap();
    assert!(m.words.is_empty());
    assert_eq!(m.status, DocumentStatus::Actual);
}

#[test]
fn errors_are_reported() {
    let mut server = pets();
    assert_eq!(server.match_document("cat", 9).unwrap_err(), SearchError::UnknownDocumentId(9));
    assert_eq!(server.find_top_documents("cat -").unwrap_err(), SearchError::MalformedQuery("-".into()));
    assert_eq!(
        server.add_document(2, "another dog", DocumentStatus::Actual, &[]).unwrap_err(),
        SearchError::DuplicateDocumentId(2)
    );
    assert_eq!(server.document_count(), 4);
}

#[test]
fn term_frequencies_sum_to_one_per_document() {
    let mut server = pets();
    server.add_document(10, "and the", DocumentStatus::Actual, &[1, 2]).unwrap();
    for id in server.document_ids().collect::<Vec<_>>() {
        let tfs = server.index().term_frequencies(id);
        if id == 10 {
            assert!(tfs.is_empty());
            continue;
        }
        let sum: f64 = tfs.values().sum();
        assert!((sum - 1.0).abs() < EPS, "doc {id} sums to {sum}");
    }
}

#[test]
fn results_are_bounded_ordered_and_repeatable() {
    let mut server = SearchServer::with_config(SearchConfig::default());
    let texts = ["a b c", "a a b", "a", "b c d", "c c c a", "d e", "a e e e", "b"];
    for (id, text) in texts.iter().enumerate() {
        server.add_document(id as u32 * 3 + 1, text, DocumentStatus::Actual, &[id as i32]).unwrap();
    }
    let first = server.find_top_documents("a c e").unwrap();
    assert_eq!(first.len(), 5);
    assert!(first.windows(2).all(|w| w[0].relevance >= w[1].relevance));
    assert_eq!(first, server.find_top_documents("a c e").unwrap());
}

#[test]
fn ubiquitous_term_scores_zero() {
    let mut server = SearchServer::new();
    server.add_document(0, "cat dog", DocumentStatus::Actual, &[]).unwrap();
    server.add_document(1, "cat", DocumentStatus::Actual, &[]).unwrap();
    let top = server.find_top_documents("cat").unwrap();
    assert_eq!(top.len(), 2);
    assert!(top.iter().all(|d| d.relevance == 0.0));
    assert_eq!(top[0].id, 0);
}

#[test]
fn shared_server_serves_concurrent_readers() {
    let shared: SharedSearchServer = SearchServer::with_config(SearchConfig::with_limit(5)).into();
    shared.configure_stop_words("and the");

    let writers: Vec<_> = (0..4u32)
        .map(|t| {
            let shared = shared.clone();
            thread::spawn(move || {
                for i in 0..25u32 {
                    let id = t * 100 + i;
                    shared.add_document(id, "fluffy cat and the tail", DocumentStatus::Actual, &[1]).unwrap();
                }
            })
        })
        .collect();
    let readers: Vec<_> = (0..4)
        .map(|_| {
            let shared = shared.clone();
            thread::spawn(move || {
                for _ in 0..25 {
                    let top = shared.find_top_documents("fluffy").unwrap();
                    assert!(top.len() <= 5);
                }
            })
        })
        .collect();
    for h in writers.into_iter().chain(readers) {
        h.join().unwrap();
    }

    assert_eq!(shared.document_count(), 100);
    assert_eq!(shared.match_document("cat -the", 0).unwrap().words, vec!["cat"]);
    assert_eq!(shared.read(|s| s.index().document_frequency("fluffy")), 100);
}
