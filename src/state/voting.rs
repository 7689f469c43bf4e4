#[cfg(test)]
#[path = "voting_test.rs"]
mod voting_test;

use crate::net::types::{Candidate, VoteSubmission};

/// Candidate list fetch status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FetchStatus {
    #[default]
    Loading,
    Loaded,
    Failed,
}

/// Voting page state.
///
/// The page is *browsing* while no candidate is selected and *confirming*
/// once one is. Submission returns to browsing with a transient success
/// banner, or stays in confirming with an error message.
#[derive(Clone, Debug, Default)]
pub struct VotingState {
    pub status: FetchStatus,
    pub candidates: Vec<Candidate>,
    pub selected: Option<Candidate>,
    pub voter_full_name: String,
    pub voter_reg_number: String,
    pub error: Option<String>,
    pub success: bool,
}

impl VotingState {
    /// Candidate list arrived; keep the raw server order.
    pub fn load_success(&mut self, candidates: Vec<Candidate>) {
        self.candidates = candidates;
        self.status = FetchStatus::Loaded;
    }

    /// A failed fetch is terminal for this mount; there is no retry.
    pub fn load_failure(&mut self, message: String) {
        self.error = Some(message);
        self.status = FetchStatus::Failed;
    }

    pub fn is_confirming(&self) -> bool {
        self.selected.is_some()
    }

    /// Group the raw list by school with a single left-to-right fold,
    /// preserving both the first-encounter order of schools and the
    /// relative order of candidates within each school.
    pub fn candidates_by_school(&self) -> Vec<(String, Vec<Candidate>)> {
        let mut groups: Vec<(String, Vec<Candidate>)> = Vec::new();
        for candidate in &self.candidates {
            match groups.iter_mut().find(|(school, _)| *school == candidate.school) {
                Some((_, members)) => members.push(candidate.clone()),
                None => groups.push((candidate.school.clone(), vec![candidate.clone()])),
            }
        }
        groups
    }

    /// Browsing → confirming. Selecting a card also drops any prior error.
    pub fn select_candidate(&mut self, candidate: Candidate) {
        self.selected = Some(candidate);
        self.error = None;
    }

    /// Confirming → browsing without a request. Voter input is kept.
    pub fn back_to_list(&mut self) {
        self.selected = None;
    }

    pub fn set_voter_full_name(&mut self, value: String) {
        self.voter_full_name = value;
    }

    pub fn set_voter_reg_number(&mut self, value: String) {
        self.voter_reg_number = value;
    }

    /// Validation gate before the network call: a vote needs a selected
    /// candidate and a non-empty voter registration number. A violation
    /// records a local error and produces nothing.
    pub fn build_submission(&mut self) -> Option<VoteSubmission> {
        match &self.selected {
            Some(candidate) if !self.voter_reg_number.is_empty() => Some(VoteSubmission {
                voter_reg_number: self.voter_reg_number.clone(),
                candidate_id: candidate.id,
            }),
            _ => {
                self.error = Some(
                    "Please select a candidate and enter your registration number".to_owned(),
                );
                None
            }
        }
    }

    /// Vote accepted: back to browsing with the banner up and the voter
    /// input cleared. The page schedules [`VotingState::clear_success`].
    pub fn record_success(&mut self) {
        self.success = true;
        self.error = None;
        self.voter_full_name.clear();
        self.voter_reg_number.clear();
        self.selected = None;
    }

    /// Vote rejected: stay in confirming with the message showing.
    pub fn record_failure(&mut self, message: String) {
        self.error = Some(message);
    }

    pub fn clear_success(&mut self) {
        self.success = false;
    }
}
