use color_eyre::eyre::{ensure, Result};

/// One unit of story content: an illustration plus optional narrative text.
#[derive(Debug, Clone)]
pub struct Page {
    /// Ordinal position in the story; stable for the lifetime of the session.
    pub id: usize,
    pub title: String,
    /// Opaque asset reference; the view decides how (or whether) to draw it.
    pub image: String,
    /// Narrative paragraphs separated by blank lines. Empty on cover pages.
    pub text: String,
}

impl Page {
    pub fn paragraphs(&self) -> impl Iterator<Item = &str> {
        self.text
            .split("\n\n")
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }
}

/// An ordered, immutable, non-empty sequence of pages.
#[derive(Debug, Clone)]
pub struct Story {
    title: String,
    pages: Vec<Page>,
}

impl Story {
    /// The sole fatal precondition of the whole system: a story must have at
    /// least one page.
    pub fn new(title: impl Into<String>, pages: Vec<Page>) -> Result<Self> {
        ensure!(!pages.is_empty(), "empty story: at least one page is required");
        Ok(Self {
            title: title.into(),
            pages,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn last_index(&self) -> usize {
        self.pages.len() - 1
    }

    pub fn page(&self, index: usize) -> Option<&Page> {
        self.pages.get(index)
    }
}

/// The compiled-in storybook. Content is fixed at build time; the core treats
/// it as an injected read-only collaborator.
pub fn builtin_pages() -> Vec<Page> {
    let mk_page = |id: usize, title: &str, image: &str, text: &str| Page {
        id,
        title: title.into(),
        image: image.into(),
        text: text.into(),
    };

    vec![
        mk_page(
            0,
            "Piraye and the City of Numbers",
            "images/cover.png",
            // cover has no text
            "",
        ),
        mk_page(
            1,
            "Chapter 1 - A Boring Afternoon",
            "images/ch1.png",
            "Piraye slumped into her favourite armchair, bored of her math \
             homework and the cartoons looping on TV. She longed for something, \
             anything, that would make numbers feel alive.",
        ),
        mk_page(
            2,
            "Chapter 2 - The Humming Workbook",
            "images/ch2.png",
            "Just as her eyes were closing, the workbook on the table began to \
             hum. The sevens wriggled loose from their sums and lined up along \
             the margin like a tiny marching band.\n\n\
             \"Well?\" said the boldest seven. \"Are you coming or not?\"",
        ),
        mk_page(
            3,
            "Chapter 3 - Through the Decimal Gate",
            "images/ch3.png",
            "The page folded itself into a doorway, and beyond it glittered a \
             city built entirely of digits. Towers of nines leaned over streets \
             paved with zeros, and a river of fractions wound between them.",
        ),
        mk_page(
            4,
            "Chapter 4 - The Mayor of Round Numbers",
            "images/ch4.png",
            "The mayor, a plump and cheerful one hundred, explained the \
             trouble: the city's odd numbers had stopped speaking to the even \
             ones, and nothing would add up until somebody made peace.\n\n\
             Piraye took a deep breath. She knew exactly where to start.",
        ),
        mk_page(
            5,
            "Chapter 5 - Adding Things Up",
            "images/ch5.png",
            "One plus one, she showed them, made two; odd plus odd made even; \
             and every number, however prickly, was somebody's sum. By sunset \
             the whole city was counting together again.",
        ),
        mk_page(
            6,
            "The End",
            "images/end.png",
            "Back in the armchair, the workbook lay quiet. But the sums no \
             longer looked boring to Piraye. They looked like doorways.",
        ),
    ]
}
