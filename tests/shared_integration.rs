//! Testes de integração para o cache compartilhado entre tarefas.

use std::time::Duration;

use complexity_cache::{
    AnalysisMethod, ComplexityAssessment, ComplexityLevel, SharedAssessmentCache,
};

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_sets_respect_capacity() {
    let cache: SharedAssessmentCache = SharedAssessmentCache::new(16, Duration::from_secs(60));

    let mut handles = Vec::new();
    for task in 0..8 {
        let cache = cache.clone();
        handles.push(tokio::spawn(async move {
            for i in 0..50 {
                let text = format!("task {task} problem {i}");
                let method = AnalysisMethod::ALL[i % 3];
                cache.set(
                    &text,
                    ComplexityAssessment::new(ComplexityLevel::Medium),
                    method,
                );
                cache.get(&text);
            }
        }));
    }

    for handle in handles {
        handle.await.expect("task panicked");
    }

    let stats = cache.stats();
    assert_eq!(stats.size, 16);
    assert_eq!(stats.method_distribution.total(), 16);
    assert_eq!(stats.lookups, 400);
    assert!(stats.hits <= stats.lookups);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_readers_see_same_value() {
    let cache: SharedAssessmentCache = SharedAssessmentCache::new(8, Duration::from_secs(60));
    cache.set(
        "shared problem",
        ComplexityAssessment::new(ComplexityLevel::High),
        AnalysisMethod::McpSampling,
    );

    let mut handles = Vec::new();
    for _ in 0..10 {
        let cache = cache.clone();
        handles.push(tokio::spawn(async move { cache.get("shared problem") }));
    }

    for handle in handles {
        let cached = handle.await.expect("task panicked");
        assert_eq!(cached.map(|a| a.level), Some(ComplexityLevel::High));
    }

    let stats = cache.stats();
    assert_eq!(stats.hits, 10);
    assert_eq!(stats.hit_rate, 1.0);
}

#[tokio::test]
async fn test_clear_from_another_task() {
    let cache: SharedAssessmentCache<String> =
        SharedAssessmentCache::new(8, Duration::from_secs(60));
    cache.set("a", "low".to_string(), AnalysisMethod::LocalNlp);

    let clearer = cache.clone();
    tokio::spawn(async move { clearer.clear() })
        .await
        .expect("task panicked");

    assert!(cache.get("a").is_none());
    assert_eq!(cache.stats().size, 0);
}
