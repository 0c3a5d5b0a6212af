/// Simulated ticket categories known at deploy time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TicketTypeId {
    BillingPod,
    DevPod,
    DcPod,
    MarketingStrategyPod,
    Cnx,
    K1,
    Enterprise,
    Professional,
    Standard,
    Growth,
    Portfolio,
    GoldPartner,
    SilverPartner,
    PlatinumPartner,
    ElitePartner,
}

impl TicketTypeId {
    pub const ALL: [TicketTypeId; 15] = [
        TicketTypeId::BillingPod,
        TicketTypeId::DevPod,
        TicketTypeId::DcPod,
        TicketTypeId::MarketingStrategyPod,
        TicketTypeId::Cnx,
        TicketTypeId::K1,
        TicketTypeId::Enterprise,
        TicketTypeId::Professional,
        TicketTypeId::Standard,
        TicketTypeId::Growth,
        TicketTypeId::Portfolio,
        TicketTypeId::GoldPartner,
        TicketTypeId::SilverPartner,
        TicketTypeId::PlatinumPartner,
        TicketTypeId::ElitePartner,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TicketTypeId::BillingPod => "billingpod",
            TicketTypeId::DevPod => "devpod",
            TicketTypeId::DcPod => "dcpod",
            TicketTypeId::MarketingStrategyPod => "marketingstrategypod",
            TicketTypeId::Cnx => "cnx",
            TicketTypeId::K1 => "k1",
            TicketTypeId::Enterprise => "enterprise",
            TicketTypeId::Professional => "professional",
            TicketTypeId::Standard => "standard",
            TicketTypeId::Growth => "growth",
            TicketTypeId::Portfolio => "portfolio",
            TicketTypeId::GoldPartner => "goldpartner",
            TicketTypeId::SilverPartner => "silverpartner",
            TicketTypeId::PlatinumPartner => "platinumpartner",
            TicketTypeId::ElitePartner => "elitepartner",
        }
    }

    /// Exact match only; request keys are case sensitive.
    pub fn from_str(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.as_str() == value)
    }

    pub fn label(&self) -> &'static str {
        match self {
            TicketTypeId::BillingPod => "Billing Pod",
            TicketTypeId::DevPod => "Dev Pod",
            TicketTypeId::DcPod => "DC Pod",
            TicketTypeId::MarketingStrategyPod => "Marketing Strategy Pod",
            TicketTypeId::Cnx => "CNX",
            TicketTypeId::K1 => "K1",
            TicketTypeId::Enterprise => "Enterprise",
            TicketTypeId::Professional => "Professional",
            TicketTypeId::Standard => "Standard",
            TicketTypeId::Growth => "Growth",
            TicketTypeId::Portfolio => "Portfolio",
            TicketTypeId::GoldPartner => "Gold Partner",
            TicketTypeId::SilverPartner => "Silver Partner",
            TicketTypeId::PlatinumPartner => "Platinum Partner",
            TicketTypeId::ElitePartner => "Elite Partner",
        }
    }

    pub fn template_file_name(&self) -> String {
        format!("{}ticketexample.json", self.as_str())
    }
}
