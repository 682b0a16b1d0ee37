// Ownership-based authorization

/// Allow an operation only when the caller owns the resource.
///
/// `owner_id` is the owner reference stored on the resource; `caller_id` is
/// the authenticated user. `denied` builds the error for a mismatch.
/// No IO, usable for any resource type.
pub fn ensure_owner<E, F>(owner_id: i32, caller_id: i32, denied: F) -> Result<(), E>
where
    F: FnOnce() -> E,
{
    if owner_id == caller_id {
        Ok(())
    } else {
        tracing::warn!(
            "Ownership check failed: resource owner {}, caller {}",
            owner_id,
            caller_id
        );
        Err(denied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, PartialEq)]
    struct Denied;

    #[test]
    fn test_owner_is_allowed() {
        assert_eq!(ensure_owner(7, 7, || Denied), Ok(()));
    }

    #[test]
    fn test_other_user_is_denied() {
        assert_eq!(ensure_owner(7, 8, || Denied), Err(Denied));
    }

    proptest! {
        #[test]
        fn prop_allows_iff_ids_match(owner in 1i32..1000, caller in 1i32..1000) {
            let result = ensure_owner(owner, caller, || Denied);
            prop_assert_eq!(result.is_ok(), owner == caller);
        }
    }
}
