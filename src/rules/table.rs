//! Built-in category table.
//!
//! Order is significant: `RuleSet::classify` returns the first rule with a
//! matching pattern, so more specific categories sit before generic ones and
//! generic prefixes carry exclusions for names claimed elsewhere.

use super::CategoryRule;
use super::pattern::Pattern::{Exact, Prefix, PrefixExcept, Suffix};

pub(crate) static CATEGORY_RULES: &[CategoryRule] = &[
    CategoryRule {
        name: "AI",
        patterns: &[
            Prefix("AI_"),
            Prefix("ARTIFICIAL_INTELLIGENCE"),
            Exact("MAGIC_AI"),
            Exact("PENCIL_EDIT_AI"),
        ],
        tags: &["artificial intelligence", "machine learning", "generative", "smart", "auto"],
    },
    CategoryRule {
        name: "Arrows",
        patterns: &[
            Prefix("ARROW_"),
            Prefix("CHEVRON_"),
            Prefix("CIRCLE_ARROW_"),
            Exact("COMPARE_ARROWS"),
            Exact("UNFOLD_MORE"),
        ],
        tags: &["navigation", "direction", "back", "forward", "up", "down", "expand", "collapse"],
    },
    CategoryRule {
        name: "E-Commerce",
        patterns: &[
            Prefix("SHOPPING_"),
            Prefix("CART_"),
            Prefix("STORE_"),
            Prefix("SALE_TAG"),
            Exact("HOT_PRICE"),
            Exact("TROLLEY"),
            PrefixExcept("PRODUCT", &["_BOX", "_SEARCH"]),
            Exact("ORDERS"),
            Prefix("BAR_CODE"),
            Exact("QR_CODE"),
            Prefix("DISCOUNT_"),
            Exact("TICKET_BAR_CODE"),
            Exact("PIX"),
            Exact("PROMOTION"),
        ],
        tags: &["shop", "buy", "store", "basket", "order", "cart", "barcode"],
    },
    CategoryRule {
        name: "Finance",
        patterns: &[
            Prefix("MONEY_"),
            Prefix("DOLLAR_"),
            Prefix("WALLET"),
            Prefix("PAYMENT"),
            Exact("TAXES"),
            Exact("BANK"),
            Prefix("COINS_"),
            Prefix("CURRENCY_"),
            Exact("CALCULATOR_MONEY"),
            Prefix("REVERSE_WITHDRAWAL"),
            Exact("WITHDRAW"),
            Prefix("INVOICE"),
            Prefix("CREDIT_CARD"),
            Exact("COMPUTER_DOLLAR"),
            Prefix("TRADE_"),
            Exact("TRANSACTION_HISTORY"),
            Exact("CARDS"),
        ],
        tags: &["payment", "banking", "currency", "transfer", "withdraw", "money"],
    },
    CategoryRule {
        name: "Payment Cards",
        patterns: &[
            Exact("MERCADO_PAGO"),
            Exact("AMAZON_PAY"),
            Exact("GOOGLE_PAY"),
            Exact("PAYPAL"),
            Exact("APPLE_PAY"),
            Exact("ELO"),
            Exact("MASTERCARD"),
            Exact("AMERICAN_EXPRESS"),
            Exact("DINERS_CLUB"),
            Exact("CIRRUS"),
            Exact("VISA"),
            Exact("HIPERCARD"),
            Exact("JCB"),
            Exact("UNIONPAY"),
            Exact("MAESTRO"),
            Exact("HIPER"),
            Exact("DISCOVER"),
            Exact("CVC"),
        ],
        tags: &["credit", "debit", "card brand", "payment method"],
    },
    CategoryRule {
        name: "Payment Badges",
        patterns: &[Suffix("_BADGE")],
        tags: &["payment method", "checkout", "badge"],
    },
    CategoryRule {
        name: "Users",
        patterns: &[
            Prefix("USER_"),
            Exact("USER"),
            Prefix("ACCOUNT_"),
            Exact("PROFILE"),
            Prefix("ADD_USER"),
            Exact("MANAGER"),
            Exact("MENTORING"),
        ],
        tags: &["people", "profile", "team", "group", "person", "account"],
    },
    CategoryRule {
        name: "Files & Documents",
        patterns: &[
            Prefix("FILE"),
            Exact("EDIT_FILE"),
            Exact("CHECKED_FILE"),
            Exact("ADD_FILE"),
            Exact("SEND_FILE"),
            Exact("SHARE_FILE"),
            Exact("SEARCH_FILE"),
            Exact("ANNEXED_FILE"),
            Prefix("IC_"),
            Prefix("MEDIA_"),
            Prefix("XML_FILE"),
            Exact("GOOGLE_SHEET"),
            Exact("WAVE_FILE"),
            Exact("CHECK_SUCCESS_FILE"),
            Prefix("NOTE_"),
            Exact("DOCUMENT_CODE"),
            Prefix("FOLDER_"),
            Exact("PDF_ICON"),
            Exact("ATTACHMENT"),
            Exact("LICENSE_ARTICLE"),
        ],
        tags: &["document", "attachment", "upload", "file type"],
    },
    CategoryRule {
        name: "Communication",
        patterns: &[
            Prefix("MESSAGE_"),
            Prefix("CHAT"),
            Prefix("MAIL"),
            Exact("NOTIFICATION"),
            Prefix("BELL_"),
            Prefix("BUBBLE_CHAT"),
            Prefix("DOUBLE_CHAT"),
            Prefix("PERSON_CHAT"),
            Exact("HEADSET"),
            Exact("TELEPHONE"),
            Exact("ERROR_BELL"),
        ],
        tags: &["email", "notify", "alert", "inbox", "chat", "message"],
    },
    CategoryRule {
        name: "Status & Feedback",
        patterns: &[
            Exact("CHECK_CIRCLE"),
            Prefix("CHECK_MARK"),
            Exact("SIMPLE_CHECK"),
            Prefix("ALERT_"),
            Prefix("WARNING_"),
            Exact("INFO"),
            Exact("INFO_CIRCLE"),
            Prefix("HELP_"),
            Exact("VERIFIED"),
            Exact("HEXAGON_WARNING"),
            Prefix("CHECKMARK_"),
            Prefix("THUMBS_"),
            Prefix("CANCEL_CIRCLE"),
            Prefix("PASSPORT_"),
            Exact("CHECK_LIST"),
            Exact("INFORMATIONS"),
        ],
        tags: &["success", "error", "confirm", "validate", "status", "feedback"],
    },
    CategoryRule {
        name: "Add & Remove",
        patterns: &[
            Exact("ADD_CIRCLE"),
            Exact("SIMPLE_ADD"),
            Prefix("MINUS_"),
            Prefix("DELETE_"),
            Prefix("CLOSE_MARK"),
            Exact("SUBNODE_ADD"),
            Prefix("TASK_ADD"),
            Exact("PACKAGE_ADD"),
            Exact("PACKAGE_REMOVE"),
            Exact("PROPERTY_DELETE"),
            Exact("ADD_TO_LIST"),
        ],
        tags: &["create", "remove", "cancel", "clear", "add"],
    },
    CategoryRule {
        name: "Filter & Sort",
        patterns: &[
            Prefix("FILTER_"),
            Prefix("SORTING_"),
            Prefix("SORT_"),
            Exact("ORDENATING"),
            Exact("PREFERENCE_HORIZONTAL"),
        ],
        tags: &["order", "ascending", "descending", "organize", "filter"],
    },
    CategoryRule {
        name: "Search",
        patterns: &[
            PrefixExcept("SEARCH_", &["FILE"]),
            Exact("SEARCHING"),
            Prefix("ZOOM_"),
        ],
        tags: &["find", "lookup", "magnifying glass", "search"],
    },
    CategoryRule {
        name: "Settings & Tools",
        patterns: &[
            Exact("SETTINGS"),
            Exact("SLIDERS_HORIZONTAL"),
            Exact("DASHBOARD_CIRCLE_SETTINGS"),
            Exact("LIST_SETTING"),
            Exact("TIME_SETTING"),
            Prefix("COMPUTER_SETTINGS"),
            Exact("TOOLS"),
            Prefix("WRENCH_"),
            Exact("PLUG_SOCKET"),
            Exact("WEBHOOK"),
            Exact("CUSTOMIZE"),
        ],
        tags: &["config", "preferences", "gear", "options", "tools"],
    },
    CategoryRule {
        name: "Layout & Views",
        patterns: &[
            PrefixExcept("LIST_", &["CLOCK", "SETTING"]),
            Prefix("GRID_"),
            PrefixExcept("DASHBOARD_", &["CIRCLE"]),
            Exact("TABLE"),
            PrefixExcept("COLUMN", &["_CHART"]),
            Prefix("LAYOUT_"),
            Exact("VIEW_COLUMN"),
            Prefix("SIDEBAR_"),
            Exact("SIMPLE_LIST"),
            Prefix("HORIZONTAL_LIST"),
            Prefix("HORIZONTAL_LINES"),
            Prefix("CAROUSEL_"),
            Prefix("ALIGN_BOX"),
            Exact("TORN_LIST"),
            Exact("MORE_GRID"),
            Exact("INSERT_ROW"),
        ],
        tags: &["view", "display", "board", "grid", "list", "layout"],
    },
    CategoryRule {
        name: "Data & Analytics",
        patterns: &[
            Prefix("CHART"),
            Prefix("ANALYTICS"),
            Exact("BLOCKCHAIN"),
            Exact("COLUMN_CHART"),
            Prefix("DATABASE"),
        ],
        tags: &["graph", "metrics", "statistics", "report", "data", "database"],
    },
    CategoryRule {
        name: "Social Media",
        patterns: &[
            Prefix("FACEBOOK"),
            Exact("INSTAGRAM"),
            Exact("YOUTUBE"),
            Exact("LINKEDIN"),
            Exact("WHATSAPP"),
            Exact("WHATSAPP_ICON"),
            Exact("DISCORD"),
            Exact("TIKTOK"),
            Exact("X"),
            Exact("GOOGLE"),
        ],
        tags: &["social", "network", "share"],
    },
    CategoryRule {
        name: "Editing",
        patterns: &[
            PrefixExcept("PENCIL", &["_EDIT_AI"]),
            Prefix("PAINT_"),
            Prefix("COPY_"),
            PrefixExcept("SHARE_", &["FILE"]),
            Prefix("DRAG_"),
            Prefix("SAVE_"),
            PrefixExcept("TEXT_", &["NUMBER"]),
            Exact("TEXT"),
            Exact("HTML"),
            Exact("JSON"),
            Exact("SQL"),
            Exact("SOURCE_CODE"),
            Exact("CODE_FOLDER"),
        ],
        tags: &["write", "draw", "duplicate", "clipboard", "edit"],
    },
    CategoryRule {
        name: "Logistics",
        patterns: &[
            Prefix("TRUCK"),
            Prefix("SHIPPING_"),
            Prefix("DELIVERY_"),
            Exact("PACKAGE_MOVING"),
            Exact("PACKAGE_OPEN"),
            Exact("PACKAGE"),
            Exact("BOX"),
            Exact("OPENED_BOX"),
            Exact("SIZE_BOX"),
            Exact("PRODUCT_BOX"),
            Exact("PRODUCT_SEARCH_BOX"),
        ],
        tags: &["transport", "tracking", "shipping", "delivery", "package"],
    },
    CategoryRule {
        name: "Branding",
        patterns: &[Prefix("ZYDON"), Exact("ZOE_AI")],
        tags: &["logo", "brand", "identity"],
    },
    CategoryRule {
        name: "Flags",
        patterns: &[Suffix("_FLAG"), Prefix("FLAG_")],
        tags: &["country", "language", "locale"],
    },
    CategoryRule {
        name: "Security",
        patterns: &[
            Prefix("SECURITY"),
            Prefix("LOCK_"),
            Exact("LOCKED"),
            Exact("VIEW_OFF"),
            Exact("AUTHORIZED"),
            Exact("KEY_ACCESS"),
            Prefix("SQUARE_LOCK"),
            Exact("ACCESS"),
        ],
        tags: &["privacy", "password", "authentication", "security"],
    },
    CategoryRule {
        name: "Media",
        patterns: &[
            Prefix("PLAY_"),
            Prefix("PAUSE"),
            Prefix("MIC_"),
            Exact("ADD_IMAGE"),
            Exact("INSERT_CENTER_IMAGE"),
            Exact("SEARCH_IMAGE"),
        ],
        tags: &["audio", "video", "media", "play", "record"],
    },
    CategoryRule {
        name: "Time & Calendar",
        patterns: &[
            Prefix("CALENDAR"),
            Prefix("SELECT_HOUR"),
            Exact("COUNTER_CLOCK"),
            Prefix("CLOCK_"),
            Exact("DATE_TIME"),
            Exact("INTERVAL_DATE"),
            Exact("HOURGLASS"),
            Exact("TIME_LIST"),
            Exact("LIST_CLOCK"),
        ],
        tags: &["date", "time", "schedule", "calendar", "clock"],
    },
    CategoryRule {
        name: "Navigation",
        patterns: &[
            Prefix("HOME_"),
            Prefix("MENU_"),
            Prefix("OPEN_IN_NEW"),
            Prefix("LOGOUT_"),
            Exact("DIRECTIONS"),
            Prefix("LOCATION_"),
            Prefix("EARTH_"),
            Exact("INTERNET"),
            Exact("GLOBAL_ICON"),
        ],
        tags: &["home", "menu", "navigation", "link", "location"],
    },
    CategoryRule {
        name: "Product Categories",
        patterns: &[
            Exact("BONE"),
            Exact("BLENDER"),
            Exact("VEGETARIAN_FOOD"),
            Prefix("AUTOMOTIVE_BATTERY"),
            Exact("LAPTOP"),
            Exact("NECKLACE"),
            Prefix("VYNIL_"),
            Exact("GAMEBOY"),
            Prefix("BLUSH_BRUSH"),
            Exact("RUNNING_SHOES"),
            Exact("BABY_BOY_DRESS"),
            Prefix("MEDICINE_"),
            Exact("CRANE"),
            Prefix("WARDROBE_"),
            Exact("PERFUME"),
            Prefix("LAMP_"),
            Exact("STATIONERY"),
        ],
        tags: &["product category", "industry", "department"],
    },
    CategoryRule {
        name: "Development",
        patterns: &[
            Prefix("GITHUB"),
            Exact("REPOSITORY"),
            Prefix("COMPUTER_PROGRAMMING"),
            Prefix("PUZZLE_STROKE"),
            Prefix("CHART_RELATIONSHIP"),
            Prefix("FLOW"),
            Prefix("SMART_PHONE"),
            Exact("COMPUTER"),
        ],
        tags: &["code", "programming", "development", "api"],
    },
    CategoryRule {
        name: "UI Controls",
        patterns: &[
            Prefix("TOGGLE_"),
            Prefix("RADIO_BUTTON"),
            Exact("CHECK_BOX"),
            Exact("DROPDOWN"),
            Exact("SQUARE_FILL"),
            Exact("DOT"),
            Exact("CIRCLE"),
            Prefix("PERCENT"),
            Exact("DECIMAL"),
            Exact("DECIMAL_INCREASE"),
            Exact("INTEGER_NUMBER"),
            Exact("NUMBER_ONE_OUTLINE"),
            Exact("TEXT_NUMBER_SIGN"),
            Exact("LOW_PRIORITY"),
            Exact("CALCULATE_SIGNS"),
        ],
        tags: &["input", "control", "form", "toggle", "checkbox", "radio"],
    },
    CategoryRule {
        name: "Cloud & Transfer",
        patterns: &[
            Prefix("CLOUD_"),
            Prefix("DOWNLOAD_"),
            Exact("UPLOAD"),
            Exact("INBOX_DOWNLOAD"),
            Exact("SENT"),
            Exact("LINK_HORIZONTAL"),
        ],
        tags: &["cloud", "download", "upload", "transfer", "sync"],
    },
    CategoryRule {
        name: "Business",
        patterns: &[
            Exact("OFFICE"),
            Exact("CORPORATE"),
            Exact("BUILDING"),
            Prefix("FACTORY_"),
            Exact("HAND_BAG_BRIEFCASE"),
            Exact("DISTRIBUTION"),
        ],
        tags: &["business", "company", "office", "enterprise", "corporate"],
    },
    CategoryRule {
        name: "Interface",
        patterns: &[
            Exact("RELOAD_REFRESH"),
            Exact("REFRESH_CHANGE"),
            Exact("EXPAND_FULL_SCREEN"),
            Exact("MAXIMIZE_SCREEN"),
            Exact("MINIMIZE_SCREEN"),
            Exact("MORE_OPTIONS_VERTICAL"),
            Exact("MORE_03"),
            Exact("MORE"),
            Exact("MORE_BOLD"),
            Exact("CURSOR_IN_WINDOW"),
            Exact("LAYERS"),
            Exact("PRINTER"),
            Exact("SUMMATION"),
            Exact("VIEW_ON"),
            Exact("REPEATE_ONE_02"),
            Exact("CLEAN"),
            Exact("TOUCH_INTERACTION"),
            Exact("BANNER"),
            Exact("MINI_BANNER"),
            Exact("RULER"),
            Exact("CREATIVE_MARKET"),
            Exact("FLASH_ROUNDED"),
            Exact("FLASH_STROKE_ROUNDED"),
            Exact("ZAP_ICON"),
            Exact("IDEA"),
            Exact("ROCKET"),
            Exact("REVERSE"),
            Exact("TASK_01"),
            Exact("SAVE_MARK"),
            Prefix("FAVOURITE"),
            Exact("STAR"),
            Exact("STAR_02"),
        ],
        tags: &["interface", "action", "ui", "interaction"],
    },
];
