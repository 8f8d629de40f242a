//! Connection state read by the trigger decoder.

/// What the engine knows about the caller's queue-manager connection.
///
/// The engine only reads it. A missing context, or one without a name,
/// means the compact trigger carries a blank queue-manager name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionContext {
    pub queue_manager_name: Option<String>,
}

impl ConnectionContext {
    #[must_use]
    pub fn connected(queue_manager_name: impl Into<String>) -> Self {
        Self {
            queue_manager_name: Some(queue_manager_name.into()),
        }
    }

    /// Resolved name, empty when not connected.
    #[must_use]
    pub fn queue_manager(&self) -> &str {
        self.queue_manager_name.as_deref().unwrap_or_default()
    }
}

/// Queue-manager name of an optional context.
#[must_use]
pub fn queue_manager_of(ctx: Option<&ConnectionContext>) -> &str {
    ctx.map(ConnectionContext::queue_manager).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_context_is_empty_name() {
        assert_eq!(queue_manager_of(None), "");
        assert_eq!(queue_manager_of(Some(&ConnectionContext::default())), "");
        assert_eq!(
            queue_manager_of(Some(&ConnectionContext::connected("QM1"))),
            "QM1"
        );
    }
}
