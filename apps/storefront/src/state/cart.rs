//! # Cart State
//!
//! Holds the session's shopping cart.
//!
//! ## Thread Safety
//! The cart is wrapped in `Arc<Mutex<T>>` because:
//! 1. Several commands read and modify the same cart
//! 2. Each command must see the cart whole, never half-updated
//!
//! A command runs its entire read-check-write sequence inside one
//! `with_cart_mut` call, so concurrent commands are serialised.

use std::sync::{Arc, Mutex, PoisonError};

use meow_core::Cart;

/// Shared cart state.
#[derive(Debug, Clone, Default)]
pub struct CartState {
    cart: Arc<Mutex<Cart>>,
}

impl CartState {
    /// Creates a new empty cart state.
    pub fn new() -> Self {
        CartState::default()
    }

    /// Wraps an existing cart, e.g. one restored from seed lines.
    pub fn from_cart(cart: Cart) -> Self {
        CartState {
            cart: Arc::new(Mutex::new(cart)),
        }
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust
    /// use meow_storefront_lib::state::CartState;
    ///
    /// let state = CartState::new();
    /// assert!(state.with_cart(|cart| cart.is_empty()));
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        // Cart methods validate before mutating, so a poisoned cart is
        // still consistent.
        let cart = self.cart.lock().unwrap_or_else(PoisonError::into_inner);
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.cart.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut cart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use meow_data::seed;
    use std::thread;

    #[test]
    fn test_clones_share_cart() {
        let state = CartState::from_cart(Cart::from_lines(seed::cart_lines()).unwrap());
        let other = state.clone();
        other.with_cart_mut(|c| c.clear());
        assert!(state.with_cart(|c| c.is_empty()));
    }

    #[test]
    fn test_concurrent_adds_respect_stock() {
        let product = seed::products().into_iter().find(|p| p.id == 3).unwrap();
        let state = CartState::new();

        let handles: Vec<_> = (0..6)
            .map(|_| {
                let state = state.clone();
                let product = product.clone();
                thread::spawn(move || state.with_cart_mut(|c| c.add_product(&product, "L", 1)))
            })
            .collect();

        let accepted = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(Result::is_ok)
            .count();

        // stock is 3
        assert_eq!(accepted, 3);
        assert_eq!(state.with_cart(|c| c.total_quantity()), 3);
    }
}
