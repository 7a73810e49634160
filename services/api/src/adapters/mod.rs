pub mod reasoning_llm;

pub use reasoning_llm::OpenAiReasoningAdapter;
