use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// How a signal produces its current value
enum Binding<T> {
    /// A plain stored value
    Value(T),
    /// A computed binding, re-evaluated on every read
    Computed(Rc<dyn Fn() -> T>),
}

/// Reactive property handle.
///
/// A signal holds either a plain value or a computed binding. Computed
/// bindings are closures over other signals; reading one recomputes it from
/// the current upstream state, so dependents are never stale and no
/// invalidation bookkeeping is needed. Cloning a signal clones the handle,
/// not the state: all clones observe the same binding.
///
/// Signals are single-threaded. Scene instances are never shared across
/// threads; the render engine builds one instance per worker instead.
pub struct Signal<T> {
    inner: Rc<RefCell<Binding<T>>>,
}

impl<T: Clone + 'static> Signal<T> {
    /// Create a signal holding a plain value
    pub fn value(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Binding::Value(value))),
        }
    }

    /// Create a signal backed by a computed binding
    pub fn computed(f: impl Fn() -> T + 'static) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Binding::Computed(Rc::new(f)))),
        }
    }

    /// Read the current value, recomputing if the signal is bound
    pub fn get(&self) -> T {
        // Clone the computed closure out first so the borrow is released
        // before user code reads other signals (which may alias this one).
        let computed = match &*self.inner.borrow() {
            Binding::Value(v) => return v.clone(),
            Binding::Computed(f) => Rc::clone(f),
        };
        computed()
    }

    /// Replace the binding with a plain value
    pub fn set(&self, value: T) {
        *self.inner.borrow_mut() = Binding::Value(value);
    }

    /// Replace the binding with a computed closure
    pub fn bind(&self, f: impl Fn() -> T + 'static) {
        *self.inner.borrow_mut() = Binding::Computed(Rc::new(f));
    }
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Clone + fmt::Debug + 'static> fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signal({:?})", self.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_get_set() {
        let s = Signal::value(8.0_f32);
        assert_eq!(s.get(), 8.0);

        s.set(3.0);
        assert_eq!(s.get(), 3.0);
    }

    #[test]
    fn test_clone_shares_state() {
        let a = Signal::value(1.0_f32);
        let b = a.clone();

        b.set(2.0);
        assert_eq!(a.get(), 2.0);
    }

    #[test]
    fn test_computed_tracks_upstream() {
        let width = Signal::value(600.0_f32);
        let w = width.clone();
        let half = Signal::computed(move || w.get() / 2.0);

        assert_eq!(half.get(), 300.0);

        // No manual invalidation: the next read sees the new upstream value
        width.set(100.0);
        assert_eq!(half.get(), 50.0);
    }

    #[test]
    fn test_set_overrides_binding() {
        let base = Signal::value(10.0_f32);
        let b = base.clone();
        let derived = Signal::computed(move || b.get() + 1.0);
        assert_eq!(derived.get(), 11.0);

        derived.set(0.0);
        base.set(99.0);
        assert_eq!(derived.get(), 0.0);
    }

    #[test]
    fn test_bind_after_value() {
        let s = Signal::value(1.0_f32);
        let upstream = Signal::value(4.0_f32);
        let u = upstream.clone();
        s.bind(move || u.get() * u.get());

        assert_eq!(s.get(), 16.0);
        upstream.set(5.0);
        assert_eq!(s.get(), 25.0);
    }
}
