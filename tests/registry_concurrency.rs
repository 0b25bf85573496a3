use std::sync::{Arc, Barrier};
use std::thread;

use tessera::{Token, TokenRegistry, ToolType};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

#[test]
fn racing_first_calls_share_one_token() {
    init_tracing();
    const THREADS: usize = 16;
    let registry = Arc::new(TokenRegistry::new());
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let registry = registry.clone();
            let barrier = barrier.clone();
            thread::spawn(move || {
                barrier.wait();
                registry.get_or_create("pickaxe").expect("valid name")
            })
        })
        .collect();

    let tokens: Vec<Token> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    let first = &tokens[0];
    assert!(tokens.iter().all(|t| Token::ptr_eq(t, first)));
    assert_eq!(registry.len(), 1);
}

#[test]
fn mixed_names_and_rejections_under_contention() {
    init_tracing();
    const THREADS: usize = 8;
    let registry = Arc::new(TokenRegistry::new());
    let barrier = Arc::new(Barrier::new(THREADS));
    let names = ["axe", "shovel", "hoe", "shears", "Axe", "axe2", ""];

    let handles: Vec<_> = (0..THREADS)
        .map(|i| {
            let registry = registry.clone();
            let barrier = barrier.clone();
            thread::spawn(move || {
                barrier.wait();
                for round in 0..200 {
                    let name = names[(i + round) % names.len()];
                    let res = registry.get_or_create(name);
                    let expect_ok = name.chars().all(|c| c.is_ascii_lowercase() || c == '_')
                        && !name.is_empty();
                    assert_eq!(res.is_ok(), expect_ok, "name {name:?}");
                }
            })
        })
        .collect();

    for h in handles {
        h.join().unwrap();
    }

    assert_eq!(registry.names(), vec!["axe", "hoe", "shears", "shovel"]);
}

#[test]
fn builtins_from_many_threads() {
    init_tracing();
    let registry = Arc::new(TokenRegistry::new());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let registry = registry.clone();
            thread::spawn(move || ToolType::register_builtins(&registry).unwrap())
        })
        .collect();

    let sets: Vec<Vec<ToolType>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for set in &sets[1..] {
        for (a, b) in set.iter().zip(&sets[0]) {
            assert!(Token::ptr_eq(a.token(), b.token()));
        }
    }
    assert_eq!(registry.len(), ToolType::BUILTINS.len());
}
