// Concurrent article-processing pipeline.
//
// `article` runs the full fetch-through-score pass for one URL under a
// deadline; `batch` fans one such task out per URL and collects results
// as they complete.

pub mod article;
pub mod batch;
