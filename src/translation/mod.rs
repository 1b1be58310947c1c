mod baidu;
mod google;
mod language;
mod runner;
mod translator;
mod youdao;

pub use baidu::BaiduTranslator;
pub use google::GoogleWebTranslator;
pub use language::{
    LANGUAGES, LanguageEntry, baidu_lang, is_known_language, print_languages, validate_language,
    youdao_lang,
};
pub use runner::{BatchRunner, TranslateEvent, TranslateTask};
pub use translator::{ProgressFn, REQUEST_TIMEOUT_SECS, Translator, build_translator};
pub use youdao::YoudaoTranslator;
