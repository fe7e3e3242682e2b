use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// Vote of the viewer on a post or comment.
#[derive(Clone, Copy, Debug, Default, Display, EnumIter, Eq, Hash, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[repr(i16)]
pub enum VoteValue {
    Up = 1,
    #[default]
    None = 0,
    Down = -1,
}

/// Content targeted by a vote.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum VoteTarget {
    Post(String),
    Comment {
        post_id: String,
        comment_id: String,
    },
}

/// Score of a post or comment as seen by the viewer.
///
/// The baseline is captured once when the view mounts and never recomputed afterward, the viewer's vote
/// is applied on top of it. `score` is updated incrementally by each toggle and always equals
/// `baseline + vote`.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct VoteState {
    baseline: i64,
    vote: VoteValue,
    score: i64,
}

impl From<i16> for VoteValue {
    fn from(value: i16) -> VoteValue {
        match value {
            1..=i16::MAX => VoteValue::Up,
            0 => VoteValue::None,
            i16::MIN..=-1_i16 => VoteValue::Down,
        }
    }
}

impl VoteState {
    /// Mounts a vote state for content with the given server tallies. The viewer's vote starts at [`VoteValue::None`].
    pub fn mount(upvote_count: u32, downvote_count: u32) -> Self {
        Self::from_baseline(i64::from(upvote_count) - i64::from(downvote_count))
    }

    pub fn from_baseline(baseline: i64) -> Self {
        VoteState {
            baseline,
            vote: VoteValue::None,
            score: baseline,
        }
    }

    pub fn baseline(&self) -> i64 {
        self.baseline
    }

    pub fn vote(&self) -> VoteValue {
        self.vote
    }

    pub fn display_score(&self) -> i64 {
        self.score
    }

    /// Applies an upvote click and returns the score delta.
    pub fn toggle_up(&mut self) -> i64 {
        self.toggle(true)
    }

    /// Applies a downvote click and returns the score delta.
    pub fn toggle_down(&mut self) -> i64 {
        self.toggle(false)
    }

    fn toggle(&mut self, is_upvote: bool) -> i64 {
        let previous_vote = self.vote;
        update_vote_value(&mut self.vote, is_upvote);
        let score_delta = get_score_delta(self.vote, previous_vote);
        self.score += score_delta;
        log::trace!("Vote {previous_vote:?} -> {:?}, score delta {score_delta}", self.vote);
        debug_assert_eq!(self.score, self.baseline + self.vote as i64);
        score_delta
    }
}

pub fn update_vote_value(vote: &mut VoteValue, is_upvote: bool) {
    *vote = match *vote {
        VoteValue::Up => {
            if is_upvote {
                VoteValue::None
            } else {
                VoteValue::Down
            }
        }
        VoteValue::None => {
            if is_upvote {
                VoteValue::Up
            } else {
                VoteValue::Down
            }
        }
        VoteValue::Down => {
            if is_upvote {
                VoteValue::Up
            } else {
                VoteValue::None
            }
        }
    };
}

pub fn get_score_delta(vote: VoteValue, previous_vote: VoteValue) -> i64 {
    (vote as i64) - (previous_vote as i64)
}
