//! Integration tests for the rewrite engine
//!
//! Tests configuration presets, statistics across walks, and walk tracing.

use graft::ast::{Decl, Expr, Node, NodeKind, Stmt};
use graft::rewrite::trace::{RemoveCause, WalkEvent};
use graft::rewrite::{
    Engine, FnRewriter, RewriteConfig, TraceOutput, Tracer, TracerConfig, Visit, WalkStats,
};

use crate::trees::{remove_kind, var, var_decl};

fn traced_engine() -> Engine {
    Engine::new(RewriteConfig::default().with_trace(TracerConfig::new().enabled()))
}

fn descend(_: &mut Node) -> Visit {
    Visit::Descend
}

// =============================================================================
// Statistics
// =============================================================================

#[test]
fn stats_describe_the_last_walk() {
    let mut engine = Engine::default();

    let decl = Node::from(var_decl(vec![var("a", 1), var("b", 2)]));
    let _ = engine.walk(Some(decl), &mut FnRewriter(remove_kind(NodeKind::BasicLit)));
    assert_eq!(
        *engine.stats(),
        WalkStats {
            visited: 7,
            removed: 2,
            dropped: 2,
            ..WalkStats::default()
        }
    );

    let _ = engine.walk(Some(Node::from(Expr::ident("x"))), &mut FnRewriter(descend));
    assert_eq!(engine.stats().visited, 1);
    assert!(engine.stats().is_unchanged());
}

#[test]
fn stats_display() {
    let mut engine = Engine::default();
    let decl = Node::from(var_decl(vec![var("a", 1)]));
    let _ = engine.walk(Some(decl), &mut FnRewriter(remove_kind(NodeKind::ValueSpec)));

    assert_eq!(
        engine.stats().to_string(),
        "2 visited, 0 skipped, 2 removed (1 cascaded), 0 cleared, 1 dropped, 0 pruned"
    );
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn default_engine_does_not_trace() {
    let mut engine = Engine::default();
    let _ = engine.walk(Some(Node::from(Expr::ident("x"))), &mut FnRewriter(descend));

    assert!(!engine.tracer().is_enabled());
    assert!(engine.tracer().buffer().is_empty());
    assert!(engine.config().tidy_file_comments);
}

#[test]
fn debug_preset_logs_and_records() {
    let mut engine = Engine::new(RewriteConfig::debug());
    let _ = engine.walk(Some(Node::from(Stmt::Empty)), &mut FnRewriter(descend));

    assert!(engine.tracer().is_enabled());
    assert_eq!(engine.tracer().buffer().len(), 2);
}

#[test]
fn tracer_can_be_toggled_between_walks() {
    let mut engine = Engine::default();
    engine.tracer_mut().enable();
    engine.tracer_mut().set_output(TraceOutput::Log);
    let _ = engine.walk(Some(Node::from(Expr::ident("x"))), &mut FnRewriter(descend));
    assert_eq!(engine.tracer().buffer().len(), 2);

    engine.tracer_mut().disable();
    let _ = engine.walk(Some(Node::from(Expr::ident("y"))), &mut FnRewriter(descend));
    assert_eq!(engine.tracer().buffer().len(), 2);
}

// =============================================================================
// Tracing
// =============================================================================

#[test]
fn trace_follows_walk_order() {
    let mut engine = traced_engine();
    let expr = Node::from(Expr::paren(Expr::ident("x")));
    let _ = engine.walk(Some(expr), &mut FnRewriter(descend));

    let events: Vec<_> = engine.tracer().buffer().iter().map(|r| r.event.clone()).collect();
    assert_eq!(
        events,
        vec![
            WalkEvent::Enter { kind: NodeKind::ParenExpr },
            WalkEvent::Enter { kind: NodeKind::Ident },
            WalkEvent::Leave { kind: NodeKind::Ident },
            WalkEvent::Leave { kind: NodeKind::ParenExpr },
        ]
    );
    let depths: Vec<_> = engine.tracer().buffer().iter().map(|r| r.depth).collect();
    assert_eq!(depths, vec![0, 1, 1, 0]);
}

#[test]
fn trace_records_mutations() {
    let mut engine = traced_engine();
    let decl = Node::from(var_decl(vec![var("a", 1)]));
    let _ = engine.walk(Some(decl), &mut FnRewriter(remove_kind(NodeKind::Ident)));

    let mutations: Vec<_> = engine
        .tracer()
        .buffer()
        .filter(|r| r.event.is_mutation())
        .into_iter()
        .map(|r| r.event.clone())
        .collect();
    assert_eq!(
        mutations,
        vec![
            WalkEvent::Remove {
                kind: NodeKind::Ident,
                cause: RemoveCause::Explicit,
            },
            WalkEvent::Remove {
                kind: NodeKind::ValueSpec,
                cause: RemoveCause::Cascade,
            },
            WalkEvent::Remove {
                kind: NodeKind::GenDecl,
                cause: RemoveCause::Cascade,
            },
        ]
    );
}

#[test]
fn trace_records_clears_and_skips() {
    let mut engine = traced_engine();
    let stmt = Node::from(Stmt::block(vec![Stmt::ret(vec![Expr::int(1)])]));
    let _ = engine.walk(
        Some(stmt),
        &mut FnRewriter(|node: &mut Node| {
            if node.kind() == NodeKind::ReturnStmt {
                Visit::Skip
            } else {
                Visit::Descend
            }
        }),
    );

    let skips = engine.tracer().buffer().by_event_type("skip");
    assert_eq!(skips.len(), 1);
    assert_eq!(skips[0].event, WalkEvent::Skip { kind: NodeKind::ReturnStmt });
    assert!(engine.tracer().buffer().by_event_type("clear").is_empty());
}

#[test]
fn trace_separates_walks() {
    let mut engine = traced_engine();
    let _ = engine.walk(Some(Node::from(Expr::ident("x"))), &mut FnRewriter(descend));
    let _ = engine.walk(Some(Node::from(Expr::ident("y"))), &mut FnRewriter(descend));

    assert_eq!(engine.tracer().current_walk(), 2);
    assert_eq!(engine.tracer().buffer().records_for_walk(1).len(), 2);
    assert_eq!(engine.tracer().buffer().records_for_walk(2).len(), 2);

    let stats = engine.tracer().stats();
    assert_eq!(stats.oldest_walk, Some(1));
    assert_eq!(stats.newest_walk, Some(2));
    assert_eq!(stats.event_counts.get("enter"), Some(&2));
}

#[test]
fn trace_filter_keeps_selected_events() {
    let config = TracerConfig::new()
        .enabled()
        .filter_events(vec!["remove".to_string()]);
    let mut engine = Engine::new(RewriteConfig::default().with_trace(config));

    let decl = Node::from(Decl::from(graft::ast::GenDecl::new(
        graft::ast::Token::Var,
        vec![var("a", 1)],
    )));
    let _ = engine.walk(Some(decl), &mut FnRewriter(remove_kind(NodeKind::ValueSpec)));

    let types: Vec<_> = engine.tracer().buffer().iter().map(|r| r.event_type()).collect();
    assert_eq!(types, vec!["remove", "remove"]);
}

#[test]
fn trace_buffer_is_bounded() {
    let config = TracerConfig::new().enabled().with_buffer_size(3);
    let mut tracer = Tracer::new(config);
    tracer.begin_walk();
    for _ in 0..10 {
        tracer.record(0, WalkEvent::Enter { kind: NodeKind::Ident });
    }

    assert_eq!(tracer.buffer().len(), 3);
    assert_eq!(tracer.buffer().recent(1)[0].id, 9);
}

#[test]
fn trace_records_display() {
    let mut engine = traced_engine();
    let _ = engine.walk(Some(Node::from(Expr::ident("x"))), &mut FnRewriter(descend));

    let lines: Vec<_> = engine.tracer().buffer().iter().map(ToString::to_string).collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("W0001 [000000] "));
    assert!(lines[0].contains("Ident"));
}
