// Resume-to-job similarity ranking over a TF-IDF vector space.

pub mod handlers;
pub mod ranker;
pub mod stop_words;
pub mod tfidf;
