use std::sync::Arc;

use chrono::Utc;
use copilot_core::models::{Chunk, Document, FileType};
use copilot_storage::cosine_similarity;
use copilot_storage::search::rank;
use proptest::prelude::*;

fn arb_vector(dims: usize) -> impl Strategy<Value = Vec<f32>> {
    prop::collection::vec(-1.0f32..1.0, dims)
}

fn documents_from(embeddings: Vec<Vec<f32>>) -> Vec<Arc<Document>> {
    embeddings
        .into_iter()
        .enumerate()
        .map(|(i, e)| {
            let id = format!("d{i}");
            Arc::new(Document {
                title: id.clone(),
                source_path: format!("{id}.txt"),
                file_type: FileType::Text,
                content: String::new(),
                summary: String::new(),
                tags: vec![],
                chunks: vec![Chunk::new(&id, 0, "t".into(), e)],
                indexed_at: Utc::now(),
                id,
            })
        })
        .collect()
}

proptest! {
    #[test]
    fn cosine_of_self_is_one(v in arb_vector(16)) {
        prop_assume!(v.iter().any(|x| *x != 0.0));
        prop_assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn cosine_with_zero_is_zero(v in arb_vector(16)) {
        prop_assert_eq!(cosine_similarity(&v, &[0.0; 16]), 0.0);
    }

    #[test]
    fn cosine_is_bounded(a in arb_vector(8), b in arb_vector(8)) {
        let s = cosine_similarity(&a, &b);
        prop_assert!((-1.0..=1.0).contains(&s));
    }

    #[test]
    fn ranking_is_sorted_bounded_and_thresholded(
        embeddings in prop::collection::vec(arb_vector(6), 0..40),
        query in arb_vector(6),
        top_k in 0usize..20,
        min_score in 0.0f64..1.0,
    ) {
        let docs = documents_from(embeddings);
        let results = rank(&docs, &query, top_k, min_score, &[]);

        prop_assert!(results.len() <= top_k);
        prop_assert!(results.iter().all(|r| r.score >= min_score));
        prop_assert!(results.windows(2).all(|w| w[0].score >= w[1].score));
    }
}
