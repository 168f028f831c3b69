//! Article URL sources: the built-in list and URL-file loading.
//!
//! The exporter takes its URL list as an explicit parameter; this module is
//! where that list comes from. Resolution order:
//!
//! 1. URLs given directly on the command line
//! 2. URLs read from `--urls-file` (appended after the positional ones)
//! 3. the built-in [`DEFAULT_ARTICLE_URLS`] when neither supplied anything

use std::error::Error;
use tokio::fs;
use tracing::{error, info, instrument};

/// The built-in article list used when the CLI provides no URLs.
///
/// Two batches of kompas.com coverage collected for the retrieval corpus.
pub const DEFAULT_ARTICLE_URLS: &[&str] = &[
    // Shin Tae-yong dismissal and the Kluivert appointment
    "https://bola.kompas.com/read/2025/01/09/18300018/shin-tae-yong-cinta-sepak-bola-indonesia-akademi-terus-berjalan?source=headline",
    "https://bandung.kompas.com/read/2025/01/09/201334078/dari-shin-tae-yong-ke-kluivert-tantangan-berat-pelatih-anyar-timnas",
    "https://surabaya.kompas.com/read/2025/01/09/185211678/meski-kecewa-sty-dipecat-suporter-di-surabaya-tetap-dukung-dan-optimistis",
    "https://surabaya.kompas.com/read/2025/01/09/173007778/sty-dipecat-kantor-pssi-blitar-jadi-sasaran-pelampiasan",
    "https://regional.kompas.com/read/2025/01/09/150724878/dari-shin-tae-yong-ke-patrick-kluivert-antara-kejutan-dan-harapan",
    "https://bola.kompas.com/read/2025/01/09/14253868/shin-tae-yong-timnas-indonesia-dan-hierarki-di-budaya-korea-selatan",
    "https://bola.kompas.com/read/2025/01/09/11561798/reaksi-jurnalis-korsel-terhadap-pemberhentian-shin-tae-yong",
    "https://www.kompas.com/tren/read/2025/01/09/091500865/patrick-kluivert-ungkap-alasan-mau-latih-timnas-indonesia-apa-katanya",
    "https://bola.kompas.com/read/2025/01/09/04380038/pssi-harus-bayar-puluhan-miliar-rupiah-sebagai-kompensasi-shin-tae-yong",
    "https://bola.kompas.com/read/2025/01/08/21193368/kata-kata-pertama-patrick-kluivert-sebagai-pelatih-timnas-indonesia",
    "https://bola.kompas.com/read/2025/01/08/13560818/kim-sang-sik-sulit-berkata-kata-sebut-shin-tae-yong-senior-yang-hebat",
    // Free nutritious meal programme rollout
    "https://money.kompas.com/read/2025/01/09/204540026/luhut-klaim-rp-9-miliar-berputar-di-tiap-desa-karena-program-makan-bergizi",
    "https://www.kompas.com/jawa-timur/read/2025/01/08/084729688/peralatan-dapur-belum-lengkap-pelaksanaan-makan-bergizi-gratis-tidak",
    "https://nasional.kompas.com/read/2025/01/07/20050071/kepala-sekolah-sds-barunawati--program-makan-bergizi-bantu-penuhi-gizi-siswa",
    "https://nasional.kompas.com/read/2025/01/07/19530001/program-makan-bergizi-resmi-beroperasi-4-sppg-di-jakarta-jangkau-12.054",
    "https://nasional.kompas.com/read/2025/01/07/19452931/program-makan-bergizi-gratis-resmi-beroperasi-sppg-palmerah-salurkan-2987",
    "https://www.kompas.com/sulawesi-selatan/read/2025/01/07/151254688/program-makan-siang-gratis-di-maros-makan-pakai-wadah-plastik",
    "https://money.kompas.com/read/2025/01/07/133443626/zulhas-ungkap-anggaran-program-makan-gratis-tembus-rp-420-triliun",
    "https://www.kompas.com/jawa-timur/read/2025/01/07/101100988/apakah-ada-susu-ikan-maupun-susu-sapi-di-menu-makan-bergizi-gratis-",
    "https://surabaya.kompas.com/read/2025/01/06/212042678/distribusi-makan-siang-gratis-di-bojonegoro-belum-menyeluruh-dapur-sppg",
    "https://www.kompas.com/tren/read/2025/01/06/150000265/media-asing-soroti-makan-bergizi-gratis-singgung-stunting-dan-skema",
];

/// Parse a newline-separated URL list.
///
/// Lines are trimmed; blank lines and `#` comment lines are skipped.
/// Order is preserved.
pub fn parse_url_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Build the final ordered URL list from CLI arguments.
///
/// Positional URLs come first, then the contents of `urls_file` (when
/// given). The built-in list is used only when neither source was supplied
/// at all; an explicitly given file that yields no URLs resolves to an
/// empty list, not to the built-in one.
///
/// # Returns
///
/// The resolved list, or an error if `urls_file` cannot be read.
#[instrument(level = "info", skip_all)]
pub async fn resolve_urls(
    cli_urls: &[String],
    urls_file: Option<&str>,
) -> Result<Vec<String>, Box<dyn Error>> {
    let mut urls: Vec<String> = cli_urls.to_vec();

    if let Some(path) = urls_file {
        let raw = match fs::read_to_string(path).await {
            Ok(raw) => raw,
            Err(e) => {
                error!(%path, error = %e, "Failed to read URL list file");
                return Err(e.into());
            }
        };
        let from_file = parse_url_lines(&raw);
        info!(count = from_file.len(), %path, "Loaded URLs from file");
        urls.extend(from_file);
    }

    if cli_urls.is_empty() && urls_file.is_none() {
        urls = DEFAULT_ARTICLE_URLS.iter().map(|s| s.to_string()).collect();
        info!(count = urls.len(), "Using built-in article list");
    }

    Ok(urls)
}
