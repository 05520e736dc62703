//! Request tickets so only the latest lookup of a panel lands.

/// Issues increasing tickets and accepts results for the newest one only.
#[derive(Clone, Copy, Debug, Default)]
pub struct Tickets {
	latest: u64,
}

impl Tickets {
	/// A ticket for a new request; every earlier ticket becomes stale.
	pub fn issue(&mut self) -> u64 {
		self.latest += 1;
		self.latest
	}

	/// `result` if `ticket` is still the newest, otherwise `None`.
	pub fn accept<T>(&self, ticket: u64, result: T) -> Option<T> {
		(ticket == self.latest).then_some(result)
	}
}
