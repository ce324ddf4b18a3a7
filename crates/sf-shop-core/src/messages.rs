pub const INVALID_LOGIN: &str = "❌ Invalid username or password!";
pub const LOGGED_OUT: &str = "👋 You have been logged out successfully!";
pub const ORDER_PLACED: &str = "🎉 Your order has been placed successfully!";
pub const MESSAGE_SENT: &str = "📨 Message sent successfully! We'll get back to you soon.";
pub const EMPTY_CART: &str = "Your cart is empty 🛍";
pub const ADDED: &str = "Added ✓";
