//! Token 契约的端到端测试

mod common;
use common::source_at;

use std::sync::Arc;
use std::thread;

use tokrt_core::{
    CommonToken, SourcePair, Token, TokenRecord, TOKEN_DEFAULT_CHANNEL, TOKEN_EOF,
    TOKEN_HIDDEN_CHANNEL,
};

#[test]
fn test_end_to_end_rendering() {
    let source = source_at("abcdefgXYZ", 1, 0);
    let mut token = CommonToken::new(source, 7, TOKEN_DEFAULT_CHANNEL, Some(0), Some(2));
    token.set_token_index(3).unwrap();

    assert_eq!(token.text().as_deref(), Some("abc"));
    assert_eq!(token.to_string(), "[@3,0:2='abc',<7>,1:0]");
}

#[test]
fn test_explicit_text_ignores_stream() {
    for (start, stop) in [(0, 2), (5, 9), (9, 9)] {
        let mut token = CommonToken::new(source_at("abcdefgXYZ", 1, 0), 1, 0, Some(start), Some(stop));
        token.set_text("fixed".to_string());
        assert_eq!(token.text().as_deref(), Some("fixed"));
    }
}

#[test]
fn test_span_text_matches_stream() {
    let text = "abcdefgXYZ";
    for start in 0..text.len() {
        for stop in start..text.len() {
            let token = CommonToken::new(source_at(text, 1, 0), 1, 0, Some(start), Some(stop));
            assert_eq!(token.text().as_deref(), Some(&text[start..=stop]));
        }
    }
}

#[test]
fn test_out_of_range_span_is_eof() {
    let size = 10;
    for (start, stop) in [(10, 9), (10, 10), (0, 10), (12, 15)] {
        let token = CommonToken::new(source_at("abcdefgXYZ", 1, 0), TOKEN_EOF, 0, Some(start), Some(stop));
        assert!(start >= size || stop >= size);
        assert_eq!(token.text().as_deref(), Some("<EOF>"));
    }
}

#[test]
fn test_clone_contract() {
    let mut original = CommonToken::new(source_at("abcdefgXYZ", 4, 2), 9, TOKEN_HIDDEN_CHANNEL, Some(3), Some(5));
    original.set_token_index(11).unwrap();

    let mut copy = original.clone();
    assert!(copy.shares_source(&original));
    assert_eq!(
        (copy.token_type(), copy.channel(), copy.start(), copy.stop()),
        (original.token_type(), original.channel(), original.start(), original.stop())
    );
    assert_eq!(
        (copy.token_index(), copy.line(), copy.column()),
        (Some(11), 4, Some(2))
    );
    assert_eq!(copy.text().as_deref(), Some("def"));

    copy.set_text("changed".to_string());
    assert_eq!(original.text().as_deref(), Some("def"));
    assert_eq!(copy.to_string(), "[@11,3:5='changed',<9>,channel=1,4:2]");
    assert_eq!(original.to_string(), "[@11,3:5='def',<9>,channel=1,4:2]");
}

#[test]
fn test_channel_segment() {
    let default = CommonToken::new(source_at("abc", 1, 0), 1, TOKEN_DEFAULT_CHANNEL, Some(0), Some(0));
    let hidden = CommonToken::new(source_at("abc", 1, 0), 1, TOKEN_HIDDEN_CHANNEL, Some(0), Some(0));
    assert!(!default.to_string().contains("channel="));
    assert!(hidden.to_string().contains(",channel=1,"));
}

#[test]
fn test_rendering_strips_control_characters() {
    let mut token = CommonToken::with_text(2, "a\nb\tc");
    token.set_token_index(0).unwrap();
    assert_eq!(token.to_string(), "[@0,-1:-1='abc',<2>,0:-1]");
    // 文本本身不变
    assert_eq!(token.text().as_deref(), Some("a\nb\tc"));
}

#[test]
fn test_synthetic_token_has_no_origin() {
    let token = CommonToken::new(SourcePair::empty(), 1, 0, None, None);
    assert!(token.token_source().is_none());
    assert!(token.input_stream().is_none());
    assert!(token.text().is_none());
    assert_eq!(token.to_string(), "[@-1,-1:-1='<no text>',<1>,0:-1]");
}

#[test]
fn test_tokens_readable_across_threads() {
    let mut token = CommonToken::new(source_at("hello world", 1, 6), 1, 0, Some(6), Some(10));
    token.set_token_index(1).unwrap();
    let shared = Arc::new(token);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let token = Arc::clone(&shared);
            thread::spawn(move || token.to_string())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), "[@1,6:10='world',<1>,1:6]");
    }
}

#[test]
fn test_record_matches_rendering() {
    let mut token = CommonToken::new(source_at("abcdefgXYZ", 1, 0), 7, 0, Some(0), Some(2));
    token.set_token_index(3).unwrap();
    let record = TokenRecord::from_token(&token);
    assert_eq!(
        record,
        TokenRecord {
            index: 3,
            start: 0,
            stop: 2,
            text: Some("abc".to_string()),
            token_type: 7,
            channel: 0,
            line: 1,
            column: 0,
        }
    );
}
