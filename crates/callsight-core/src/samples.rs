//! Built-in sample transcripts

/// Sample call transcripts with mixed sentiment.
///
/// These make the analyzer demonstrable without any credential; the offline
/// analyzer handles them deterministically.
pub const SAMPLE_TRANSCRIPTS: &[&str] = &[
    "Hi, I tried to book a slot yesterday but the payment failed and I was charged twice. I’m really frustrated and want a refund immediately.",
    "Good afternoon, I recently ordered a laptop from your website. It arrived yesterday, but the screen is cracked, and I can’t use it. Please help me replace it quickly.",
    "Hello, I’m trying to log into my account but I keep getting an error message that my password is incorrect, even though I just reset it yesterday.",
    "I booked a flight through your app last week. Today I got an email saying my booking was cancelled without my consent. I urgently need this resolved.",
    "Hi, I’m a long-time customer, but lately your delivery service has been very slow. My last two orders arrived late by more than a week. I need reassurance this won’t happen again.",
    "Hello, I purchased headphones last month, and they stopped working after only a few days. I tried troubleshooting, but nothing helps. Can I get a replacement or refund?",
    "Good morning, I received my order yesterday and everything is perfect. I really appreciate the fast delivery and excellent packaging. Thank you!",
    "Hi, I just wanted to say that the support team helped me resolve my issue very quickly. I am happy with the service and will continue using your platform.",
    "Hello, I called earlier about my car rental booking, but the representative didn’t provide a clear resolution. I would like to know the next steps to complete the process.",
    "Good evening, I was double charged for my subscription this month. I only need one active subscription, so please cancel the duplicate charge and issue a refund.",
];
