// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Custom assertions for completion context tests

use xml_assist_context::{CompletionContext, ProviderType};

/// Assertion helpers for resolved completion contexts
pub struct ContextAssertions;

impl ContextAssertions {
    /// Assert that a context was resolved with the given provider and prefix
    pub fn assert_context(
        ctx: &Option<CompletionContext<'_>>,
        provider_type: ProviderType,
        prefix: Option<&str>,
    ) {
        let ctx = ctx
            .as_ref()
            .unwrap_or_else(|| panic!("Expected {:?}, found no context", provider_type));
        assert_eq!(ctx.provider_type, provider_type, "Provider type mismatch");
        assert_eq!(ctx.prefix(), prefix, "Prefix mismatch");
    }

    /// Assert that no context was resolved
    pub fn assert_no_context(ctx: &Option<CompletionContext<'_>>) {
        if let Some(ctx) = ctx {
            panic!(
                "Expected no context, found {:?} with prefix {:?}",
                ctx.provider_type,
                ctx.prefix()
            );
        }
    }
}
