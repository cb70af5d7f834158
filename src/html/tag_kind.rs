use super::LocalNameHash;
use hashbrown::HashMap;
use std::sync::LazyLock;

// NOTE: discriminants are part of the serialized state format. Any change
// to the order or to the number of kinds invalidates previously persisted
// scanner state.
macro_rules! declare_tag_kinds {
    (
        void: [ $($void:ident => $void_name:literal),+ $(,)? ],
        normal: [ $($normal:ident => $normal_name:literal),+ $(,)? ]
    ) => {
        /// Closed set of tag kinds the scanner distinguishes.
        #[repr(u8)]
        #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
        pub enum TagKind {
            $($void,)+
            $($normal,)+
            Custom,
        }

        impl TagKind {
            /// All kinds except `Custom`, in discriminant order.
            pub const KNOWN: &'static [TagKind] = &[
                $(TagKind::$void,)+
                $(TagKind::$normal,)+
            ];

            /// Lowercase tag name, `None` for `Custom`.
            pub fn name(self) -> Option<&'static str> {
                match self {
                    $(TagKind::$void => Some($void_name),)+
                    $(TagKind::$normal => Some($normal_name),)+
                    TagKind::Custom => None,
                }
            }

            /// Void elements have no content and no end tag.
            #[inline]
            pub fn is_void(self) -> bool {
                matches!(self, $(TagKind::$void)|+)
            }
        }
    };
}

declare_tag_kinds!(
    void: [
        Area => "area",
        Base => "base",
        Basefont => "basefont",
        Bgsound => "bgsound",
        Br => "br",
        Col => "col",
        Command => "command",
        Embed => "embed",
        Frame => "frame",
        Hr => "hr",
        Image => "image",
        Img => "img",
        Input => "input",
        Isindex => "isindex",
        Keygen => "keygen",
        Link => "link",
        Menuitem => "menuitem",
        Meta => "meta",
        Nextid => "nextid",
        Param => "param",
        Source => "source",
        Track => "track",
        Wbr => "wbr",
    ],
    normal: [
        A => "a",
        Abbr => "abbr",
        Address => "address",
        Article => "article",
        Aside => "aside",
        Audio => "audio",
        B => "b",
        Bdi => "bdi",
        Bdo => "bdo",
        Blockquote => "blockquote",
        Body => "body",
        Button => "button",
        Canvas => "canvas",
        Caption => "caption",
        Cite => "cite",
        Code => "code",
        Colgroup => "colgroup",
        Data => "data",
        Datalist => "datalist",
        Dd => "dd",
        Del => "del",
        Details => "details",
        Dfn => "dfn",
        Dialog => "dialog",
        Div => "div",
        Dl => "dl",
        Dt => "dt",
        Em => "em",
        Fieldset => "fieldset",
        Figcaption => "figcaption",
        Figure => "figure",
        Footer => "footer",
        Form => "form",
        H1 => "h1",
        H2 => "h2",
        H3 => "h3",
        H4 => "h4",
        H5 => "h5",
        H6 => "h6",
        Head => "head",
        Header => "header",
        Hgroup => "hgroup",
        Html => "html",
        I => "i",
        Iframe => "iframe",
        Ins => "ins",
        Kbd => "kbd",
        Label => "label",
        Legend => "legend",
        Li => "li",
        Main => "main",
        Map => "map",
        Mark => "mark",
        Math => "math",
        Menu => "menu",
        Meter => "meter",
        Nav => "nav",
        Noscript => "noscript",
        Object => "object",
        Ol => "ol",
        Optgroup => "optgroup",
        Option => "option",
        Output => "output",
        P => "p",
        Picture => "picture",
        Pre => "pre",
        Progress => "progress",
        Q => "q",
        Rb => "rb",
        Rp => "rp",
        Rt => "rt",
        Rtc => "rtc",
        Ruby => "ruby",
        S => "s",
        Samp => "samp",
        Script => "script",
        Section => "section",
        Select => "select",
        Slot => "slot",
        Small => "small",
        Span => "span",
        Strong => "strong",
        Style => "style",
        Sub => "sub",
        Summary => "summary",
        Sup => "sup",
        Svg => "svg",
        Table => "table",
        Tbody => "tbody",
        Td => "td",
        Template => "template",
        Textarea => "textarea",
        Tfoot => "tfoot",
        Th => "th",
        Thead => "thead",
        Time => "time",
        Title => "title",
        Tr => "tr",
        U => "u",
        Ul => "ul",
        Var => "var",
        Video => "video",
    ]
);

macro_rules! kind_is_one_of {
    ($kind:expr, [$($variant:ident),+]) => {
        matches!($kind, $(TagKind::$variant)|+)
    };
}

static KNOWN_KINDS_BY_HASH: LazyLock<HashMap<LocalNameHash, TagKind>> = LazyLock::new(|| {
    TagKind::KNOWN
        .iter()
        .filter_map(|&kind| kind.name().map(|name| (LocalNameHash::from(name), kind)))
        .collect()
});

impl TagKind {
    /// Looks up a known kind by a tag name hash. Unhashable names are always
    /// custom.
    #[inline]
    pub fn from_name_hash(hash: LocalNameHash) -> TagKind {
        if hash.is_empty() {
            return TagKind::Custom;
        }

        KNOWN_KINDS_BY_HASH
            .get(&hash)
            .copied()
            .unwrap_or(TagKind::Custom)
    }

    /// Numeric identifier used in the serialized state.
    #[inline]
    pub fn id(self) -> u8 {
        self as u8
    }

    #[inline]
    pub fn from_id(id: u8) -> Option<TagKind> {
        if id == TagKind::Custom.id() {
            Some(TagKind::Custom)
        } else {
            TagKind::KNOWN.get(usize::from(id)).copied()
        }
    }

    /// Content model check: can an element of this kind have `child` as
    /// its next open child? Anything that isn't explicitly excluded is
    /// allowed.
    pub fn can_contain(self, child: TagKind) -> bool {
        match self {
            TagKind::Li => child != TagKind::Li,
            TagKind::Dt | TagKind::Dd => !kind_is_one_of!(child, [Dt, Dd]),
            TagKind::P => !kind_is_one_of!(
                child,
                [
                    Address, Article, Aside, Blockquote, Details, Div, Dl, Fieldset, Figcaption,
                    Figure, Footer, Form, H1, H2, H3, H4, H5, H6, Header, Hr, Main, Nav, Ol, P,
                    Pre, Section
                ]
            ),
            TagKind::Colgroup => child == TagKind::Col,
            TagKind::Rb | TagKind::Rt | TagKind::Rp => !kind_is_one_of!(child, [Rb, Rt, Rp]),
            TagKind::Optgroup => child != TagKind::Optgroup,
            TagKind::Tr => child != TagKind::Tr,
            TagKind::Td | TagKind::Th => !kind_is_one_of!(child, [Td, Th, Tr]),
            _ => true,
        }
    }
}
