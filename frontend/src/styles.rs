pub const NAME_CONTAINER: &str = "h-screen flex flex-col items-center justify-center bg-gradient-to-br from-purple-600 to-blue-500 p-4";
pub const SPIN_CONTAINER: &str = "min-h-screen flex flex-col items-center justify-center bg-gradient-to-br from-indigo-600 to-purple-700 text-white p-4 overflow-hidden";
pub const NAME_CARD: &str = "w-full max-w-md p-8 bg-white/10 backdrop-blur-md rounded-2xl shadow-2xl border border-white/20";
pub const TEXT_TITLE: &str = "text-5xl font-bold text-white mb-2";
pub const TEXT_SPIN_TITLE: &str = "text-4xl md:text-5xl font-bold mb-2";
pub const TEXT_SUBTITLE: &str = "text-white/80 mb-8";
pub const TEXT_GREETING: &str = "text-xl text-white/80";
pub const INPUT: &str = "w-full px-6 py-4 text-lg bg-white/20 text-white placeholder-white/50 rounded-xl focus:outline-none focus:ring-2 focus:ring-yellow-400/70 border-2 border-white/30";
pub const BUTTON_SUBMIT: &str = "w-full py-4 text-xl font-bold rounded-xl shadow-lg transition-all duration-300 bg-yellow-400 text-gray-800 hover:bg-yellow-500";
pub const BUTTON_SUBMIT_DISABLED: &str = "w-full py-4 text-xl font-bold rounded-xl shadow-lg transition-all duration-300 bg-yellow-400/50 text-gray-600/50 cursor-not-allowed";
pub const BUTTON_SECONDARY: &str = "px-8 py-3 text-lg font-semibold rounded-xl shadow-lg transition-all bg-white/10 text-white border border-white/30 hover:bg-white/20";
pub const RESULT_TITLE: &str = "text-3xl md:text-4xl font-bold mb-2";
pub const RESULT_TEXT: &str = "text-xl text-white/80";
pub const LINK: &str = "text-yellow-300 hover:text-yellow-200 underline transition-colors duration-200";
