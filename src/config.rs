//! Deploy-specific links and payment details, kept out of the sections.

pub const APP_STORE_URL: &str = "https://apps.apple.com/in/app/zai-toon-kids/id6737912105";
pub const PLAY_STORE_URL: &str =
    "https://play.google.com/store/apps/details?id=co.d4dx.zaitoon&pcampaignid=web_share";

pub const RAZORPAY_PAGE_URL: &str = "https://pages.razorpay.com/zaitoon-kids";
pub const RAZORPAY_POLICY_URL: &str = "https://merchant.razorpay.com/policy/PV2XAkNJXKVU7X/terms";

pub const UPI_ID: &str = "vyapar.176971524101@hdfcbank";
pub const ACCOUNT_NAME: &str = "D4DX INNOVATIONS LLP";
pub const ACCOUNT_NUMBER: &str = "50200102639272";
pub const IFSC_CODE: &str = "HDFC0002811";
pub const BANK_BRANCH: &str = "CIVIL STATION";
pub const TERMINAL_ID: &str = "82182968";
pub const BANK_NAME: &str = "HDFC SmartHub Vyapar";

pub const COMPANY_URL: &str = "https://d4dx.co/";
pub const CONTACT_URL: &str = "https://d4dx.co/contacts-us/";
