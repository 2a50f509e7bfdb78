//! Asymmetric difference between the following and followers collections.

use std::collections::HashSet;

use super::social_graph::{LightweightUser, UserId};

/// Return the entries of `following` whose id is absent from `followers`.
///
/// Runs in `O(n + m)`: one pass builds the follower id set, one pass filters
/// `following`. The relative order of `following` is kept. Duplicate ids in
/// `following` are tested independently and may each appear in the result.
///
/// # Examples
/// ```
/// use duo_tracker::domain::{LightweightUser, find_non_followers};
///
/// let followers = vec![LightweightUser::with_id("1"), LightweightUser::with_id("2")];
/// let following = vec![
///     LightweightUser::with_id("1"),
///     LightweightUser::with_id("3"),
///     LightweightUser::with_id("4"),
/// ];
///
/// let non_followers = find_non_followers(&followers, &following);
/// let ids: Vec<&str> = non_followers.iter().map(|user| user.id.as_ref()).collect();
/// assert_eq!(ids, ["3", "4"]);
/// ```
pub fn find_non_followers(
    followers: &[LightweightUser],
    following: &[LightweightUser],
) -> Vec<LightweightUser> {
    let follower_ids: HashSet<&UserId> = followers.iter().map(|user| &user.id).collect();
    following
        .iter()
        .filter(|user| !follower_ids.contains(&user.id))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    //! Set semantics of the non-follower diff.

    use super::*;
    use rstest::rstest;

    fn users(ids: &[&str]) -> Vec<LightweightUser> {
        ids.iter().copied().map(LightweightUser::with_id).collect()
    }

    fn ids(result: &[LightweightUser]) -> Vec<&str> {
        result.iter().map(|user| user.id.as_ref()).collect()
    }

    #[rstest]
    #[case::partial_overlap(&["1", "2"], &["1", "3", "4"], &["3", "4"])]
    #[case::empty_following(&["1", "2"], &[], &[])]
    #[case::empty_followers(&[], &["5", "3", "9"], &["5", "3", "9"])]
    #[case::mutual(&["1", "2"], &["2", "1"], &[])]
    #[case::order_follows_following(&["8"], &["9", "8", "2", "7"], &["9", "2", "7"])]
    #[case::duplicates_kept(&["1"], &["4", "1", "4"], &["4", "4"])]
    fn diff_keeps_following_order(
        #[case] followers: &[&str],
        #[case] following: &[&str],
        #[case] expected: &[&str],
    ) {
        let result = find_non_followers(&users(followers), &users(following));
        assert_eq!(ids(&result), expected);
    }

    #[test]
    fn no_result_id_appears_in_followers() {
        let followers = users(&["10", "11", "12", "13"]);
        let following = users(&["13", "14", "10", "15", "16", "12"]);

        let result = find_non_followers(&followers, &following);

        assert!(
            result
                .iter()
                .all(|user| followers.iter().all(|follower| follower.id != user.id)),
            "diff must exclude every follower id"
        );
        assert!(
            result.iter().all(|user| following.contains(user)),
            "diff must be drawn from following"
        );
    }

    #[test]
    fn display_fields_are_carried_through() {
        let mut followed = LightweightUser::with_id("3");
        followed.username = Some("lingo_fan".to_owned());
        followed.avatar_url = Some("//simg-ssl.duolingo.com/ssr-avatars/3/SSR-abc".to_owned());
        followed.total_xp = Some(4_200);

        let result = find_non_followers(&[], std::slice::from_ref(&followed));

        assert_eq!(result, vec![followed]);
    }
}
