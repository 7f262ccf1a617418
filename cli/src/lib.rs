use anyhow::{bail, Context, Result};
use docsearch_core::{DocId, Document, DocumentStatus, MatchedDocument, SearchConfig, SearchServer};
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

/// One document as read from the input: its text and raw ratings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputDoc {
    pub text: String,
    pub ratings: Vec<i32>,
}

/// Parsed console input.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Corpus {
    pub stop_words: String,
    pub documents: Vec<InputDoc>,
    pub queries: Vec<String>,
}

#[derive(Serialize)]
struct MatchLine<'a> {
    document_id: DocId,
    status: DocumentStatus,
    words: &'a [String],
}

pub fn open_input(path: Option<&Path>) -> Result<Box<dyn BufRead>> {
    match path {
        Some(p) => {
            let f = File::open(p).with_context(|| format!("opening {}", p.display()))?;
            Ok(Box::new(BufReader::new(f)))
        }
        None => Ok(Box::new(BufReader::new(io::stdin()))),
    }
}

/// Read the stop-word line, the document count, then a text line and a ratings
/// line (`count r1 .. rN`) per document. Remaining non-empty lines are queries.
pub fn read_corpus<R: BufRead>(reader: R) -> Result<Corpus> {
    let mut lines = reader.lines();
    let mut next_line = |what: &str| -> Result<String> {
        match lines.next() {
            Some(line) => Ok(strip_cr(line?)),
            None => bail!("unexpected end of input, expected {what}"),
        }
    };

    let stop_words = next_line("stop words")?;
    let count_line = next_line("document count")?;
    let count: usize = count_line
        .trim()
        .parse()
        .with_context(|| format!("invalid document count {count_line:?}"))?;

    let mut documents = Vec::new();
    for n in 0..count {
        let text = next_line("document text")?;
        let ratings = parse_ratings(&next_line("document ratings")?)
            .with_context(|| format!("ratings of document {n}"))?;
        documents.push(InputDoc { text, ratings });
    }

    let mut queries = Vec::new();
    for line in lines {
        let line = strip_cr(line?);
        if !line.trim().is_empty() {
            queries.push(line);
        }
    }
    Ok(Corpus { stop_words, documents, queries })
}

fn strip_cr(mut line: String) -> String {
    if line.ends_with('\r') { line.pop(); }
    line
}

/// `count r1 .. rcount` with exactly `count` ratings; a blank line means no ratings.
pub fn parse_ratings(line: &str) -> Result<Vec<i32>> {
    let mut nums = line.split_whitespace().map(|s| s.parse::<i32>().with_context(|| format!("invalid rating {s:?}")));
    let count = match nums.next() {
        Some(n) => n?,
        None => return Ok(Vec::new()),
    };
    if count < 0 { bail!("negative rating count {count}"); }
    let ratings = nums.collect::<Result<Vec<_>>>()?;
    if ratings.len() != count as usize {
        bail!("expected {count} ratings, found {}", ratings.len());
    }
    Ok(ratings)
}

/// Index the corpus; documents get ids 0..N in input order with status `Actual`.
pub fn build_server(corpus: &Corpus, config: SearchConfig) -> Result<SearchServer> {
    let mut server = SearchServer::with_config(config);
    server.configure_stop_words(&corpus.stop_words);
    for (n, doc) in corpus.documents.iter().enumerate() {
        server.add_document(n as DocId, &doc.text, DocumentStatus::Actual, &doc.ratings)?;
    }
    tracing::info!(num_docs = server.document_count(), queries = corpus.queries.len(), "loaded corpus");
    Ok(server)
}

pub fn format_document(doc: &Document) -> String {
    format!("{{ document_id = {}, relevance = {}, rating = {} }}", doc.id, doc.relevance, doc.rating)
}

pub fn format_match(id: DocId, matched: &MatchedDocument) -> String {
    let mut line = format!("{{ document_id = {}, status = {}, words =", id, matched.status.code());
    for word in &matched.words {
        line.push(' ');
        line.push_str(word);
    }
    line.push('}');
    line
}

pub fn run_search<W: Write>(server: &SearchServer, queries: &[String], status: DocumentStatus, json: bool, out: &mut W) -> Result<()> {
    for query in queries {
        let docs = server
            .find_top_documents_with_status(query, status)
            .with_context(|| format!("query {query:?}"))?;
        if json {
            writeln!(out, "{}", serde_json::to_string(&docs)?)?;
        } else {
            for doc in &docs {
                writeln!(out, "{}", format_document(doc))?;
            }
        }
    }
    Ok(())
}

pub fn run_match<W: Write>(server: &SearchServer, queries: &[String], json: bool, out: &mut W) -> Result<()> {
    for query in queries {
        server.parse_query(query).with_context(|| format!("query {query:?}"))?;
        for id in server.document_ids() {
            let matched = server.match_document(query, id).with_context(|| format!("query {query:?}"))?;
            if json {
                let line = MatchLine { document_id: id, status: matched.status, words: &matched.words };
                writeln!(out, "{}", serde_json::to_string(&line)?)?;
            } else {
                writeln!(out, "{}", format_match(id, &matched))?;
            }
        }
    }
    Ok(())
}
