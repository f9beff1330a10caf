/// Access to the wrapped graph of a view.
///
/// Views implement `Base` and then opt into delegation by implementing the
/// matching `Inherit*` marker trait, which blanket-implements the operation
/// trait by forwarding to [`Base::base`].
pub trait Base {
    type Base: ?Sized;
    fn base(&self) -> &Self::Base;
}
