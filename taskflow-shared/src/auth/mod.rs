/// Authentication utilities
///
/// This module provides the authentication primitives for TaskFlow:
///
/// # Modules
///
/// - [`password`]: Argon2id password hashing and verification
/// - [`jwt`]: JWT token generation and validation
/// - [`middleware`]: Bearer token extraction for the HTTP layer
///
/// # Security Features
///
/// - **Password Hashing**: Argon2id with 64 MB memory, 3 iterations
/// - **JWT Tokens**: HS256 signing with a 24-hour expiry
/// - **Constant-time Comparison**: Password verification uses constant-time
///   operations
///
/// # Example
///
/// ```
/// use taskflow_shared::auth::password::{hash_password, verify_password};
/// use taskflow_shared::auth::jwt::{create_token, Claims};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// // Password authentication
/// let hash = hash_password("user_password")?;
/// assert!(verify_password("user_password", &hash)?);
///
/// // JWT token generation
/// let claims = Claims::new(42, "user@example.com");
/// let token = create_token(&claims, "secret-key-at-least-32-bytes-long!!")?;
/// # Ok(())
/// # }
/// ```

pub mod jwt;
pub mod middleware;
pub mod password;
