use async_trait::async_trait;

/// Provides the current location while a trail is being recorded. `None` ends the recording.
#[async_trait]
pub trait LocationSource<P: Send + 'static>: Send {
    async fn current_location(&mut self) -> Option<P>;
}

pub struct FnSource<F> {
    next: F,
}

impl<F> FnSource<F> {
    pub fn new(next: F) -> Self {
        FnSource { next }
    }
}

#[async_trait]
impl<P, F> LocationSource<P> for FnSource<F>
where
    P: Send + 'static,
    F: FnMut() -> Option<P> + Send,
{
    async fn current_location(&mut self) -> Option<P> {
        (self.next)()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn fn_source_yields_until_the_closure_returns_none() {
        let mut remaining = vec![2, 1];
        let mut source = FnSource::new(move || remaining.pop());

        assert_eq!(source.current_location().await, Some(1));
        assert_eq!(source.current_location().await, Some(2));
        assert_eq!(source.current_location().await, None);
    }
}
